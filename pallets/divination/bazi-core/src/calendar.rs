//! # 外部历法能力接口
//!
//! 公历/农历换算、节气交接、真太阳时校正都不在本库范围内，
//! 由外部干支历法提供方实现。本库只通过显式的能力 trait 消费：
//!
//! - `SexagenaryCalendar`：按日期查询精确年柱（流年推算用）
//!
//! 提供方通过 `CAPABILITY_VERSION` 声明自身能力版本，
//! 在 `Config` 中静态选定，运行期不做方法探测。

use sp_std::ops::RangeInclusive;

use crate::{error::CalendarError, types::GanZhi};

/// 默认支持年份范围
pub const SUPPORTED_YEAR_MIN: u16 = 1901;
pub const SUPPORTED_YEAR_MAX: u16 = 2100;

/// 干支历法能力
pub trait SexagenaryCalendar {
	/// 能力版本号
	const CAPABILITY_VERSION: u32;

	/// 支持的公历年份范围（闭区间）
	fn supported_years() -> RangeInclusive<u16> {
		SUPPORTED_YEAR_MIN..=SUPPORTED_YEAR_MAX
	}

	/// 查询公历日期所在的精确年柱（以立春为界）
	fn year_ganzhi_exact(year: u16, month: u8, day: u8) -> Result<GanZhi, CalendarError>;
}

/// 参考实现：按六十甲子循环推算年柱
///
/// 立春近似取 2 月 4 日，之前的日期归上一年。
/// 流年查询固定取年中日期，此近似不影响结果。
pub struct CycleYearCalendar;

impl CycleYearCalendar {
	/// 公历年对应的六十甲子序号（1984 = 甲子）
	pub const fn cycle_index(year: u16) -> u8 {
		((year as u32 + 56) % 60) as u8
	}
}

impl SexagenaryCalendar for CycleYearCalendar {
	const CAPABILITY_VERSION: u32 = 1;

	fn year_ganzhi_exact(year: u16, month: u8, day: u8) -> Result<GanZhi, CalendarError> {
		if !Self::supported_years().contains(&year) {
			return Err(CalendarError::YearOutOfRange);
		}
		let solar_year = if (month, day) < (2, 4) { year - 1 } else { year };
		GanZhi::from_index(Self::cycle_index(solar_year)).ok_or(CalendarError::Unavailable)
	}
}
