//! # 格局判定
//!
//! 规则按优先级排列在 `GEJU_RULES` 中，自上而下求值，首个命中者即为格局：
//!
//! 1. 建禄格：月支为日干之禄
//! 2. 羊刃格：月支为日干之刃
//! 3. 从格：总分低于从格阈值，取最旺异类五行定从财/从官/从儿
//! 4. 专旺格：总分高于专旺阈值，按日主五行定名
//! 5. 正格：月令藏干按权重依次取十神（跳过比劫）
//! 6. 杂格：兜底

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;

use super::{shishen::shishen_of, sizhu::SiZhu, wuxing::WuXingProfile};
use crate::{
	constants::{JIANLU_ZHI, YANGREN_ZHI},
	profile::ScoringProfile,
	types::{ShiShen, TianGan, WuXing},
};

/// 格局类别
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GeJuCategory {
	/// 正格
	Normal,
	/// 特殊格局
	Special,
}

/// 格局
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GeJuKind {
	JianLu,
	YangRen,
	CongCai,
	CongGuan,
	CongEr,
	QuZhi,
	YanShang,
	JiaSe,
	CongGe,
	RunXia,
	ZhengGuan,
	QiSha,
	ZhengCai,
	PianCai,
	ZhengYin,
	PianYin,
	ShiShen,
	ShangGuan,
	ZaGe,
}

impl GeJuKind {
	pub fn name(&self) -> &'static str {
		match self {
			GeJuKind::JianLu => "建禄格",
			GeJuKind::YangRen => "羊刃格",
			GeJuKind::CongCai => "从财格",
			GeJuKind::CongGuan => "从官格",
			GeJuKind::CongEr => "从儿格",
			GeJuKind::QuZhi => "曲直格",
			GeJuKind::YanShang => "炎上格",
			GeJuKind::JiaSe => "稼穑格",
			GeJuKind::CongGe => "从革格",
			GeJuKind::RunXia => "润下格",
			GeJuKind::ZhengGuan => "正官格",
			GeJuKind::QiSha => "七杀格",
			GeJuKind::ZhengCai => "正财格",
			GeJuKind::PianCai => "偏财格",
			GeJuKind::ZhengYin => "正印格",
			GeJuKind::PianYin => "偏印格",
			GeJuKind::ShiShen => "食神格",
			GeJuKind::ShangGuan => "伤官格",
			GeJuKind::ZaGe => "杂格",
		}
	}

	pub fn category(&self) -> GeJuCategory {
		match self {
			GeJuKind::CongCai |
			GeJuKind::CongGuan |
			GeJuKind::CongEr |
			GeJuKind::QuZhi |
			GeJuKind::YanShang |
			GeJuKind::JiaSe |
			GeJuKind::CongGe |
			GeJuKind::RunXia => GeJuCategory::Special,
			_ => GeJuCategory::Normal,
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			GeJuKind::JianLu => "月支为日主之禄，主身旺有根，宜见财官食伤",
			GeJuKind::YangRen => "月支为日主之刃，主身强刚烈，宜见官杀制刃",
			GeJuKind::CongCai => "日主极弱而财星极旺，弃命从财，宜顺从财势",
			GeJuKind::CongGuan => "日主极弱而官杀极旺，弃命从官，宜顺从官势",
			GeJuKind::CongEr => "日主极弱而食伤极旺，弃命从儿，宜顺从食伤之势",
			GeJuKind::QuZhi => "木气专旺成局，主仁慈正直，宜水木运",
			GeJuKind::YanShang => "火气炎上成局，主热情礼仪，宜木火运",
			GeJuKind::JiaSe => "土气稼穑成局，主忠厚信实，宜火土运",
			GeJuKind::CongGe => "金气从革成局，主刚毅果决，宜土金运",
			GeJuKind::RunXia => "水气润下成局，主聪慧灵活，宜金水运",
			GeJuKind::ZhengGuan => "月令透正官，主贵气端正，宜见财印相生",
			GeJuKind::QiSha => "月令透七杀，主威严果决，宜见食伤制杀或印化杀",
			GeJuKind::ZhengCai => "月令透正财，主务实勤俭，宜见官杀护财",
			GeJuKind::PianCai => "月令透偏财，主豪爽大方，宜见官杀护财",
			GeJuKind::ZhengYin => "月令透正印，主聪慧仁厚，宜见官杀生印",
			GeJuKind::PianYin => "月令透偏印，主机敏多思，宜见财星制印",
			GeJuKind::ShiShen => "月令透食神，主温和福厚，宜见财星泄秀",
			GeJuKind::ShangGuan => "月令透伤官，主聪明傲气，宜见财星或印星",
			GeJuKind::ZaGe => "月令无明显成格条件，需综合分析八字整体格局",
		}
	}

	/// 专旺格（按日主五行）
	pub fn zhuanwang(day: WuXing) -> Self {
		match day {
			WuXing::Mu => GeJuKind::QuZhi,
			WuXing::Huo => GeJuKind::YanShang,
			WuXing::Tu => GeJuKind::JiaSe,
			WuXing::Jin => GeJuKind::CongGe,
			WuXing::Shui => GeJuKind::RunXia,
		}
	}

	/// 正格（按月令藏干十神），比劫无对应格局
	pub fn zhengge(shishen: ShiShen) -> Option<Self> {
		match shishen {
			ShiShen::ZhengGuan => Some(GeJuKind::ZhengGuan),
			ShiShen::QiSha => Some(GeJuKind::QiSha),
			ShiShen::ZhengCai => Some(GeJuKind::ZhengCai),
			ShiShen::PianCai => Some(GeJuKind::PianCai),
			ShiShen::ZhengYin => Some(GeJuKind::ZhengYin),
			ShiShen::PianYin => Some(GeJuKind::PianYin),
			ShiShen::ShiShen => Some(GeJuKind::ShiShen),
			ShiShen::ShangGuan => Some(GeJuKind::ShangGuan),
			ShiShen::BiJian | ShiShen::JieCai => None,
		}
	}
}

/// 格局判定结果
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GeJu {
	pub kind: GeJuKind,
	/// 取格所依的月令藏干
	pub reference_gan: Option<TianGan>,
	pub reference_shishen: Option<ShiShen>,
	/// 该藏干是否透出于年、月、时干
	pub is_transparent: Option<bool>,
}

impl GeJu {
	fn plain(kind: GeJuKind) -> Self {
		Self { kind, reference_gan: None, reference_shishen: None, is_transparent: None }
	}

	fn with_reference(kind: GeJuKind, sizhu: &SiZhu, gan: TianGan) -> Self {
		Self {
			kind,
			reference_gan: Some(gan),
			reference_shishen: Some(shishen_of(sizhu.rizhu, gan)),
			is_transparent: Some(sizhu.is_transparent(gan)),
		}
	}

	pub fn name(&self) -> &'static str {
		self.kind.name()
	}

	pub fn category(&self) -> GeJuCategory {
		self.kind.category()
	}

	pub fn description(&self) -> &'static str {
		self.kind.description()
	}
}

/// 格局判定输入
pub struct GeJuContext<'a> {
	pub sizhu: &'a SiZhu,
	/// 日主总分
	pub total: i32,
	pub wuxing: &'a WuXingProfile,
	/// 从格阈值（严格小于）
	pub follow_below: i32,
	/// 专旺阈值（严格大于）
	pub dominant_above: i32,
}

impl<'a> GeJuContext<'a> {
	pub fn new(
		sizhu: &'a SiZhu,
		total: i32,
		wuxing: &'a WuXingProfile,
		profile: &ScoringProfile,
	) -> Self {
		Self {
			sizhu,
			total,
			wuxing,
			follow_below: profile.follow_below,
			dominant_above: profile.dominant_above,
		}
	}
}

/// 格局规则
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum GeJuRule {
	JianLu,
	YangRen,
	Cong,
	ZhuanWang,
	ZhengGe,
	ZaGe,
}

/// 按优先级排列的规则表
pub const GEJU_RULES: [GeJuRule; 6] = [
	GeJuRule::JianLu,
	GeJuRule::YangRen,
	GeJuRule::Cong,
	GeJuRule::ZhuanWang,
	GeJuRule::ZhengGe,
	GeJuRule::ZaGe,
];

impl GeJuRule {
	/// 对单条规则求值，不命中返回 None
	pub fn evaluate(&self, ctx: &GeJuContext) -> Option<GeJu> {
		let sizhu = ctx.sizhu;
		let rizhu = sizhu.rizhu;
		let month_zhi = sizhu.month_zhi();
		let month_rule = |kind: GeJuKind| match sizhu.month_zhu.primary_canggan() {
			Some(cg) => GeJu::with_reference(kind, sizhu, cg.gan),
			None => GeJu::plain(kind),
		};

		match self {
			GeJuRule::JianLu =>
				(month_zhi == JIANLU_ZHI[rizhu.0 as usize]).then(|| month_rule(GeJuKind::JianLu)),
			GeJuRule::YangRen =>
				(month_zhi == YANGREN_ZHI[rizhu.0 as usize]).then(|| month_rule(GeJuKind::YangRen)),
			GeJuRule::Cong => {
				if ctx.total >= ctx.follow_below {
					return None;
				}
				let day = rizhu.to_wuxing();
				let dominant = ctx.wuxing.strongest_except(day)?;
				let kind = if day.is_restricting(dominant) {
					GeJuKind::CongCai
				} else if dominant.is_restricting(day) {
					GeJuKind::CongGuan
				} else if day.is_generating(dominant) {
					GeJuKind::CongEr
				} else {
					return None;
				};
				Some(GeJu::plain(kind))
			},
			GeJuRule::ZhuanWang => (ctx.total > ctx.dominant_above)
				.then(|| GeJu::plain(GeJuKind::zhuanwang(rizhu.to_wuxing()))),
			GeJuRule::ZhengGe => sizhu.month_zhu.canggan.iter().find_map(|cg| {
				GeJuKind::zhengge(cg.shishen).map(|kind| GeJu::with_reference(kind, sizhu, cg.gan))
			}),
			GeJuRule::ZaGe => Some(GeJu::plain(GeJuKind::ZaGe)),
		}
	}
}

/// 判定格局
pub fn determine_geju(ctx: &GeJuContext) -> GeJu {
	for rule in GEJU_RULES.iter() {
		if let Some(geju) = rule.evaluate(ctx) {
			log::debug!("🔮 格局规则 {:?} 命中: {}", rule, geju.name());
			return geju;
		}
	}
	GeJu::plain(GeJuKind::ZaGe)
}
