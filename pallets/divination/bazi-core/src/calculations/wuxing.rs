//! # 五行分布
//!
//! 以月令本气为"令"，定出五行旺相休囚死，再按方案权重累计：
//!
//! - 天干：1 × 旺衰权重
//! - 藏干：藏干权重 × 旺衰权重
//!
//! 计数只统计天干与各支本气，中气、余气不计。
//! 强度单位为千分之一（`1.5` 记为 `1500`）。

use codec::{Decode, DecodeWithMemTracking, Encode};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use super::{rizhu::RiZhuAnalysis, sizhu::SiZhu};
use crate::{
	constants::CANGGAN_WEIGHT_TOTAL,
	profile::ScoringProfile,
	types::{RiZhuStrength, WangShuai, WuXing},
};

/// 五行相对月令的旺衰
pub fn wangshuai_of(element: WuXing, month: WuXing) -> WangShuai {
	if element == month {
		WangShuai::Wang
	} else if month.is_generating(element) {
		WangShuai::Xiang
	} else if element.is_generating(month) {
		WangShuai::Xiu
	} else if element.is_restricting(month) {
		WangShuai::Qiu
	} else {
		WangShuai::Si
	}
}

/// 五行旺衰表（按木火土金水排列）
pub fn seasonal_states(month: WuXing) -> [WangShuai; 5] {
	WuXing::ALL.map(|w| wangshuai_of(w, month))
}

/// 五行分布
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WuXingProfile {
	/// 加权强度（千分之一），木火土金水
	pub magnitudes: [u32; 5],
	/// 出现次数（天干 + 本气）
	pub counts: [u8; 5],
	/// 最旺五行
	pub strongest: WuXing,
	/// 最弱五行（不含强度为零者）
	pub weakest: Option<WuXing>,
	/// 喜用
	pub favorable: Vec<WuXing>,
	/// 忌讳
	pub unfavorable: Vec<WuXing>,
	/// 旺相休囚死
	pub states: [WangShuai; 5],
	/// 月令五行
	pub month_wuxing: WuXing,
}

impl WuXingProfile {
	pub fn magnitude(&self, wuxing: WuXing) -> u32 {
		self.magnitudes[wuxing.index()]
	}

	pub fn count(&self, wuxing: WuXing) -> u8 {
		self.counts[wuxing.index()]
	}

	pub fn state(&self, wuxing: WuXing) -> WangShuai {
		self.states[wuxing.index()]
	}

	/// 除 `exclude` 外强度最大的五行（强度须大于零，同值取相生序靠前者）
	pub fn strongest_except(&self, exclude: WuXing) -> Option<WuXing> {
		let mut best: Option<WuXing> = None;
		for w in WuXing::ALL {
			if w == exclude || self.magnitude(w) == 0 {
				continue;
			}
			if best.map_or(true, |b| self.magnitude(w) > self.magnitude(b)) {
				best = Some(w);
			}
		}
		best
	}
}

/// 按日主强弱取喜忌
///
/// 身弱喜比劫、印星，忌财星；身强反之；中和不定喜忌。
pub fn favorable_elements(day: WuXing, strength: RiZhuStrength) -> (Vec<WuXing>, Vec<WuXing>) {
	let supportive = [day, day.generated_by()].to_vec();
	let draining = [day.restricts()].to_vec();
	match strength {
		RiZhuStrength::Weak => (supportive, draining),
		RiZhuStrength::Strong => (draining, supportive),
		RiZhuStrength::Balanced => (Vec::new(), Vec::new()),
	}
}

/// 计算五行分布
pub fn analyze_wuxing(
	sizhu: &SiZhu,
	rizhu: &RiZhuAnalysis,
	profile: &ScoringProfile,
) -> WuXingProfile {
	let month_wuxing = sizhu.month_zhi().to_wuxing();
	let states = seasonal_states(month_wuxing);
	let state_weight = |w: WuXing| profile.weighting.weight(states[w.index()]);

	let mut magnitudes = [0u32; 5];
	let mut counts = [0u8; 5];

	for zhu in sizhu.zhus() {
		let w = zhu.gan().to_wuxing();
		magnitudes[w.index()] += CANGGAN_WEIGHT_TOTAL as u32 * state_weight(w) / 100;
		counts[w.index()] += 1;
	}

	for zhu in sizhu.zhus() {
		for (i, cg) in zhu.canggan.iter().enumerate() {
			magnitudes[cg.wuxing.index()] += cg.weight as u32 * state_weight(cg.wuxing) / 100;
			if i == 0 {
				counts[cg.wuxing.index()] += 1;
			}
		}
	}

	let mut strongest = WuXing::Mu;
	let mut weakest: Option<WuXing> = None;
	for w in WuXing::ALL {
		let m = magnitudes[w.index()];
		if m > magnitudes[strongest.index()] {
			strongest = w;
		}
		if m > 0 && weakest.map_or(true, |b| m < magnitudes[b.index()]) {
			weakest = Some(w);
		}
	}

	let (favorable, unfavorable) = favorable_elements(rizhu.rizhu.to_wuxing(), rizhu.strength);

	WuXingProfile {
		magnitudes,
		counts,
		strongest,
		weakest,
		favorable,
		unfavorable,
		states,
		month_wuxing,
	}
}
