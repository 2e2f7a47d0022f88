//! # 错误类型
//!
//! - `BaziError`：外部历法提供方交来的原始符号/序号不合法
//! - `CalendarError`：单个年份的历法查询失败（由大运推算器就地恢复）

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;

/// 八字计算错误
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BaziError {
	/// 非法天干符号
	InvalidTianGan,
	/// 非法地支符号
	InvalidDiZhi,
	/// 干支阴阳不配或长度错误（如"甲丑"）
	InvalidGanZhi,
	/// 六十甲子序号越界（>= 60）
	InvalidGanZhiIndex,
	/// 提供的大运柱数超过配置上限
	TooManyDaYunSteps,
}

impl BaziError {
	pub fn as_str(&self) -> &'static str {
		match self {
			BaziError::InvalidTianGan => "invalid heavenly stem",
			BaziError::InvalidDiZhi => "invalid earthly branch",
			BaziError::InvalidGanZhi => "invalid stem-branch pair",
			BaziError::InvalidGanZhiIndex => "sexagenary index out of range",
			BaziError::TooManyDaYunSteps => "too many decade pillars",
		}
	}
}

impl From<BaziError> for &'static str {
	fn from(e: BaziError) -> &'static str {
		e.as_str()
	}
}

/// 历法查询错误
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
pub enum CalendarError {
	/// 年份超出历法支持范围
	YearOutOfRange,
	/// 提供方暂不可用
	Unavailable,
}
