//! # 八字命理核心库 (Bazi Core)
//!
//! ## 概述
//!
//! 本 crate 提供八字命理的评分与分类引擎，包括：
//! - 四柱组装（藏干、十神、纳音、空亡）
//! - 日主强弱（得令 + 得地 + 天干帮扶）
//! - 五行分布（月令旺相休囚死加权）
//! - 十神汇总
//! - 格局判定（有序规则表，首个命中者生效）
//! - 大运流年推算
//!
//! 公历/农历换算、节气、真太阳时、纳音与空亡本身均由外部干支历法提供方负责，
//! 本库通过 `SexagenaryCalendar` / `ShenShaProvider` 能力接口消费。
//!
//! ## 特点
//!
//! - ✅ 纯 Rust crate，无链上存储
//! - ✅ no_std 兼容，全部整数定点运算
//! - ✅ 十神表由计算函数在编译期生成，永不分叉
//! - ✅ 输入在入口逐柱校验，非法干支返回 `BaziError`
//! - ✅ 评分方案（`ScoringProfile`）可配置，内置 `SEASONAL`（默认）与 `LEGACY`
//!
//! ## 使用示例
//!
//! ```ignore
//! pub struct Runtime;
//!
//! impl pallet_bazi_core::Config for Runtime {
//!     type Calendar = CycleYearCalendar;
//!     type ShenSha = TaoHuaYiMa;
//!     type Profile = SeasonalProfile;
//!     type MaxDaYunSteps = ConstU32<10>;
//! }
//!
//! let profile = BaziEngine::<Runtime>::calculate(&input)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod calculations;
pub mod calendar;
pub mod constants;
pub mod error;
pub mod profile;
pub mod types;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{pallet_prelude::*, traits::Get};
use scale_info::TypeInfo;
use sp_std::{marker::PhantomData, vec::Vec};

pub use calculations::*;
pub use calendar::{CycleYearCalendar, SexagenaryCalendar};
pub use error::{BaziError, CalendarError};
pub use profile::{LegacyProfile, ScoringProfile, SeasonalProfile};
pub use types::*;

use constants::RIZHU_TEZHENG;

/// 引擎配置
pub trait Config {
	/// 外部干支历法（流年查询）
	type Calendar: SexagenaryCalendar;

	/// 神煞能力，`()`（版本 0）表示不提供
	type ShenSha: ShenShaProvider;

	/// 评分方案
	type Profile: Get<ScoringProfile>;

	/// 大运步数（默认 10 步）
	type MaxDaYunSteps: Get<u32>;
}

/// 排盘输入
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartInput {
	/// 四柱（含纳音、空亡）
	pub sizhu: SiZhuInput,
	/// 生肖（提供方原样传入）
	pub zodiac: Vec<u8>,
	/// 起运参数与大运柱
	pub dayun: DaYunInput,
}

/// 生成结果所用的能力版本
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityVersions {
	pub calendar: u32,
	/// 0 表示未提供神煞
	pub shensha: u32,
}

/// 八字分析结果
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BaziProfile {
	pub sizhu: SiZhu,
	pub rizhu: RiZhuAnalysis,
	pub wuxing: WuXingProfile,
	pub shishen: ShiShenSummary,
	pub geju: GeJu,
	pub dayun: DaYunProjection,
	/// 神煞（未配置能力时为 None）
	pub shensha: Option<ShenShaSet>,
	pub zodiac: Vec<u8>,
	/// 日主特征（UTF-8）
	pub characteristics: Vec<Vec<u8>>,
	pub capabilities: CapabilityVersions,
}

/// 八字计算引擎
pub struct BaziEngine<T>(PhantomData<T>);

impl<T: Config> BaziEngine<T> {
	/// 计算完整八字分析
	pub fn calculate(input: &ChartInput) -> Result<BaziProfile, BaziError> {
		input.sizhu.validate()?;
		let profile = T::Profile::get();

		let sizhu = build_sizhu(&input.sizhu);
		let rizhu = analyze_rizhu(&sizhu, &profile);
		let wuxing = analyze_wuxing(&sizhu, &rizhu, &profile);
		let shishen = summarize_shishen(&sizhu);
		let geju = determine_geju(&GeJuContext::new(&sizhu, rizhu.total, &wuxing, &profile));
		let dayun = project_dayun::<T::Calendar>(
			&input.dayun,
			sizhu.month_zhu.ganzhi,
			T::MaxDaYunSteps::get(),
		)?;
		let shensha = if T::ShenSha::CAPABILITY_VERSION == 0 {
			None
		} else {
			T::ShenSha::shensha(&sizhu)
		};
		let characteristics = RIZHU_TEZHENG[sizhu.rizhu.0 as usize]
			.iter()
			.map(|c| c.as_bytes().to_vec())
			.collect();

		log::debug!(
			"🔮 八字计算完成: 日主 {} {} 格局 {}",
			sizhu.rizhu.name(),
			rizhu.strength.name(),
			geju.name()
		);

		Ok(BaziProfile {
			sizhu,
			rizhu,
			wuxing,
			shishen,
			geju,
			dayun,
			shensha,
			zodiac: input.zodiac.clone(),
			characteristics,
			capabilities: CapabilityVersions {
				calendar: T::Calendar::CAPABILITY_VERSION,
				shensha: T::ShenSha::CAPABILITY_VERSION,
			},
		})
	}
}
