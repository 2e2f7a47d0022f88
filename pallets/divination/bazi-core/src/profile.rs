//! # 评分方案（ScoringProfile）
//!
//! 日主强弱阈值、得地系数、五行加权方式在历次修订中并不一致，
//! 这里统一收敛为一个可选的评分方案对象，由 `Config::Profile` 选定。
//!
//! ## 单位
//!
//! - 分数：0.1 分（`40` 分记为 `400`）
//! - 得地系数：0.1 分（`15` 记为 `150`，`1.5` 记为 `15`）
//! - 单条得地分：权重（千分比）× 系数，即 0.0001 分；四支合计后统一四舍五入到 0.1 分
//! - 旺衰权重：百分比（`1.5` 记为 `150`）
//!
//! ## 预设
//!
//! | 方案 | 身弱/身强 | 得地系数（同类/印） | 五行加权 |
//! |------|-----------|---------------------|----------|
//! | `SEASONAL`（默认） | ≤25 / ≥50 | 15 / 10 | 旺相休囚死 1.5/1.2/1.0/0.7/0.5 |
//! | `LEGACY` | ≤40 / ≥60 | 1.5 / 1.0 | 平权 |

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{pallet_prelude::*, parameter_types};
use scale_info::TypeInfo;

use crate::types::WangShuai;

/// 旺相休囚死权重（百分比）
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
pub struct StateWeights {
	pub wang: u32,
	pub xiang: u32,
	pub xiu: u32,
	pub qiu: u32,
	pub si: u32,
}

impl StateWeights {
	pub const fn of(&self, state: WangShuai) -> u32 {
		match state {
			WangShuai::Wang => self.wang,
			WangShuai::Xiang => self.xiang,
			WangShuai::Xiu => self.xiu,
			WangShuai::Qiu => self.qiu,
			WangShuai::Si => self.si,
		}
	}
}

/// 五行分布加权方式
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
pub enum ElementWeighting {
	/// 平权：所有五行权重 100%
	Flat,
	/// 按月令旺衰加权
	Seasonal(StateWeights),
}

impl ElementWeighting {
	/// 某一旺衰状态对应的权重（百分比）
	pub const fn weight(&self, state: WangShuai) -> u32 {
		match self {
			ElementWeighting::Flat => 100,
			ElementWeighting::Seasonal(w) => w.of(state),
		}
	}
}

/// 得令分值（0.1 分）
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
pub struct SeasonalSupport {
	/// 日主当令
	pub same: i32,
	/// 月令生扶
	pub generated: i32,
	/// 月令泄气
	pub leaking: i32,
	/// 月令克制
	pub restricted: i32,
	/// 日主耗气
	pub exhausting: i32,
}

/// 天干帮扶分值（0.1 分）
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
pub struct StemSupport {
	/// 比劫
	pub peer: i32,
	/// 印星
	pub seal: i32,
	/// 财星（日主所克）
	pub wealth: i32,
	/// 食伤（日主所生）
	pub output: i32,
	/// 合计限幅 ±clamp
	pub clamp: i32,
}

/// 评分方案
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
pub struct ScoringProfile {
	/// 总分 <= weak_max 为身弱
	pub weak_max: i32,
	/// 总分 >= strong_min 为身强
	pub strong_min: i32,
	/// 同类藏干得地系数
	pub root_same: i32,
	/// 印星藏干得地系数
	pub root_seal: i32,
	/// 得地封顶
	pub root_cap: i32,
	pub season: SeasonalSupport,
	pub stem: StemSupport,
	pub weighting: ElementWeighting,
	/// 总分 < follow_below 时尝试从格
	pub follow_below: i32,
	/// 总分 > dominant_above 时取专旺格
	pub dominant_above: i32,
}

const SEASON: SeasonalSupport =
	SeasonalSupport { same: 400, generated: 300, leaking: -100, restricted: -200, exhausting: -50 };

const STEM: StemSupport = StemSupport { peer: 80, seal: 60, wealth: -50, output: -30, clamp: 200 };

impl ScoringProfile {
	/// 当前修订：旺衰加权 + 50/25 阈值
	pub const SEASONAL: ScoringProfile = ScoringProfile {
		weak_max: 250,
		strong_min: 500,
		root_same: 150,
		root_seal: 100,
		root_cap: 300,
		season: SEASON,
		stem: STEM,
		weighting: ElementWeighting::Seasonal(StateWeights {
			wang: 150,
			xiang: 120,
			xiu: 100,
			qiu: 70,
			si: 50,
		}),
		follow_below: 200,
		dominant_above: 750,
	};

	/// 早期修订：平权 + 60/40 阈值
	pub const LEGACY: ScoringProfile = ScoringProfile {
		weak_max: 400,
		strong_min: 600,
		root_same: 15,
		root_seal: 10,
		weighting: ElementWeighting::Flat,
		..Self::SEASONAL
	};

	/// 藏干得地分（0.0001 分，未取整）
	pub const fn root_score(&self, weight: u16, is_seal: bool) -> i32 {
		let coeff = if is_seal { self.root_seal } else { self.root_same };
		weight as i32 * coeff
	}

	/// 得地合计：四舍五入到 0.1 分后封顶
	pub fn de_di_score(&self, raw_total: i32) -> i32 {
		((raw_total + 500) / 1000).min(self.root_cap)
	}
}

impl Default for ScoringProfile {
	fn default() -> Self {
		Self::SEASONAL
	}
}

parameter_types! {
	pub const SeasonalProfile: ScoringProfile = ScoringProfile::SEASONAL;
	pub const LegacyProfile: ScoringProfile = ScoringProfile::LEGACY;
}
