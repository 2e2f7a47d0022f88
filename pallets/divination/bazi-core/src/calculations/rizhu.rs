//! # 日主强弱
//!
//! 总分 = 得令 + 得地 + 天干帮扶（单位 0.1 分）。
//!
//! - 得令：日主五行与月令五行的生克关系，取固定分值
//! - 得地：四支藏干中同类（×同类系数）与印星（×印星系数）之和，封顶
//! - 天干帮扶：年、月、时三干对日主的生扶/耗泄，合计限幅

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use super::sizhu::SiZhu;
use crate::{
	profile::ScoringProfile,
	types::{RiZhuStrength, SiZhuPosition, TianGan, WuXing},
};

/// 得令情况
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum DeLing {
	/// 日主与月令同五行
	DangLing,
	/// 月令生日主
	ShengFu,
	/// 日主生月令
	XieQi,
	/// 月令克日主
	KeZhi,
	/// 日主克月令
	HaoQi,
}

impl DeLing {
	pub fn of(day: WuXing, month: WuXing) -> Self {
		if day == month {
			DeLing::DangLing
		} else if month.is_generating(day) {
			DeLing::ShengFu
		} else if day.is_generating(month) {
			DeLing::XieQi
		} else if month.is_restricting(day) {
			DeLing::KeZhi
		} else {
			DeLing::HaoQi
		}
	}

	pub fn score(&self, profile: &ScoringProfile) -> i32 {
		let s = &profile.season;
		match self {
			DeLing::DangLing => s.same,
			DeLing::ShengFu => s.generated,
			DeLing::XieQi => s.leaking,
			DeLing::KeZhi => s.restricted,
			DeLing::HaoQi => s.exhausting,
		}
	}

	pub fn desc(&self) -> &'static str {
		match self {
			DeLing::DangLing => "日主当令",
			DeLing::ShengFu => "月令生扶",
			DeLing::XieQi => "月令泄气",
			DeLing::KeZhi => "月令克制",
			DeLing::HaoQi => "日主耗气",
		}
	}
}

/// 得地来源：某支所藏的同类或印星
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RootEntry {
	pub position: SiZhuPosition,
	pub gan: TianGan,
	/// 印星根（生日主者）
	pub is_seal: bool,
	/// 未取整得地分（0.0001 分）
	pub score: i32,
}

/// 天干帮扶类别
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StemHelpKind {
	/// 比劫：同类
	BiJie,
	/// 印星：生日主
	YinXing,
	/// 财星：日主所克
	CaiXing,
	/// 食伤：日主所生
	ShiShang,
}

impl StemHelpKind {
	pub fn name(&self) -> &'static str {
		match self {
			StemHelpKind::BiJie => "比劫",
			StemHelpKind::YinXing => "印星",
			StemHelpKind::CaiXing => "财星",
			StemHelpKind::ShiShang => "食伤",
		}
	}
}

#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct StemHelpEntry {
	pub position: SiZhuPosition,
	pub gan: TianGan,
	pub kind: StemHelpKind,
	pub score: i32,
}

/// 日主强弱分析
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RiZhuAnalysis {
	pub rizhu: TianGan,
	pub de_ling: DeLing,
	/// 得令分
	pub de_ling_score: i32,
	/// 得令说明（UTF-8）
	pub de_ling_desc: Vec<u8>,
	pub roots: Vec<RootEntry>,
	/// 得地分（封顶后）
	pub de_di_score: i32,
	pub de_di_desc: Vec<u8>,
	pub stem_helps: Vec<StemHelpEntry>,
	/// 天干帮扶分（限幅后）
	pub tiangan_help_score: i32,
	pub tiangan_help_desc: Vec<u8>,
	pub total: i32,
	pub strength: RiZhuStrength,
}

/// 如 "年支藏甲、日支藏癸(印)"，无则 "无根"
fn describe_roots(roots: &[RootEntry]) -> Vec<u8> {
	let parts = roots.iter().map(|r| {
		let mut part = Vec::new();
		part.extend_from_slice(r.position.zhi_name().as_bytes());
		part.extend_from_slice("藏".as_bytes());
		part.extend_from_slice(r.gan.name().as_bytes());
		if r.is_seal {
			part.extend_from_slice("(印)".as_bytes());
		}
		part
	});
	join_or(parts, "无根")
}

/// 如 "月干丙印星、时干甲比劫"，无则 "无帮扶"
fn describe_stem_helps(helps: &[StemHelpEntry]) -> Vec<u8> {
	let parts = helps.iter().map(|h| {
		let mut part = Vec::new();
		part.extend_from_slice(h.position.gan_name().as_bytes());
		part.extend_from_slice(h.gan.name().as_bytes());
		part.extend_from_slice(h.kind.name().as_bytes());
		part
	});
	join_or(parts, "无帮扶")
}

fn join_or(parts: impl Iterator<Item = Vec<u8>>, empty: &str) -> Vec<u8> {
	let mut out = Vec::new();
	for (i, part) in parts.enumerate() {
		if i > 0 {
			out.extend_from_slice("、".as_bytes());
		}
		out.extend_from_slice(&part);
	}
	if out.is_empty() {
		out.extend_from_slice(empty.as_bytes());
	}
	out
}

/// 按阈值划分强弱（两端闭区间）
pub fn classify_strength(total: i32, profile: &ScoringProfile) -> RiZhuStrength {
	if total >= profile.strong_min {
		RiZhuStrength::Strong
	} else if total <= profile.weak_max {
		RiZhuStrength::Weak
	} else {
		RiZhuStrength::Balanced
	}
}

/// 分析日主强弱
pub fn analyze_rizhu(sizhu: &SiZhu, profile: &ScoringProfile) -> RiZhuAnalysis {
	let rizhu = sizhu.rizhu;
	let day = rizhu.to_wuxing();
	let seal = day.generated_by();

	// 1. 得令
	let de_ling = DeLing::of(day, sizhu.month_zhi().to_wuxing());
	let de_ling_score = de_ling.score(profile);

	// 2. 得地
	let mut roots = Vec::new();
	for zhu in sizhu.zhus() {
		for cg in zhu.canggan.iter() {
			let is_seal = if cg.wuxing == day {
				false
			} else if cg.wuxing == seal {
				true
			} else {
				continue;
			};
			roots.push(RootEntry {
				position: zhu.position,
				gan: cg.gan,
				is_seal,
				score: profile.root_score(cg.weight, is_seal),
			});
		}
	}
	let de_di_score = profile.de_di_score(roots.iter().map(|r| r.score).sum());

	// 3. 天干帮扶
	let stem = &profile.stem;
	let mut stem_helps = Vec::new();
	for (position, gan) in sizhu.other_gans() {
		let wx = gan.to_wuxing();
		let (kind, score) = if wx == day {
			(StemHelpKind::BiJie, stem.peer)
		} else if wx.is_generating(day) {
			(StemHelpKind::YinXing, stem.seal)
		} else if day.is_restricting(wx) {
			(StemHelpKind::CaiXing, stem.wealth)
		} else if day.is_generating(wx) {
			(StemHelpKind::ShiShang, stem.output)
		} else {
			// 官杀不计分
			continue;
		};
		stem_helps.push(StemHelpEntry { position, gan, kind, score });
	}
	let tiangan_help_score =
		stem_helps.iter().map(|h| h.score).sum::<i32>().clamp(-stem.clamp, stem.clamp);

	let total = de_ling_score + de_di_score + tiangan_help_score;
	let strength = classify_strength(total, profile);

	log::debug!(
		"🔮 日主 {} 得令 {} 得地 {} 帮扶 {} 总分 {} => {}",
		rizhu.name(),
		de_ling_score,
		de_di_score,
		tiangan_help_score,
		total,
		strength.name()
	);

	RiZhuAnalysis {
		rizhu,
		de_ling,
		de_ling_score,
		de_ling_desc: de_ling.desc().as_bytes().to_vec(),
		de_di_desc: describe_roots(&roots),
		roots,
		de_di_score,
		tiangan_help_desc: describe_stem_helps(&stem_helps),
		stem_helps,
		tiangan_help_score,
		total,
		strength,
	}
}
