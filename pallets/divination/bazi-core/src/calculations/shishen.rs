//! # 十神计算
//!
//! 十神由日主与目标天干的五行生克及阴阳异同决定：
//!
//! | 关系 | 同性 | 异性 |
//! |------|------|------|
//! | 同我 | 比肩 | 劫财 |
//! | 我生 | 食神 | 伤官 |
//! | 我克 | 偏财 | 正财 |
//! | 克我 | 七杀 | 正官 |
//! | 生我 | 偏印 | 正印 |
//!
//! `calculate_shishen` 是唯一的计算来源，`SHISHEN_TABLE` 在编译期由它生成。

use codec::{Decode, DecodeWithMemTracking, Encode};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use super::sizhu::SiZhu;
use crate::types::{ShiShen, SiZhuPosition, TianGan};

/// 计算目标天干相对日主的十神
pub const fn calculate_shishen(rizhu: TianGan, other: TianGan) -> ShiShen {
	if rizhu.0 == other.0 {
		return ShiShen::BiJian;
	}

	let day = rizhu.to_wuxing();
	let target = other.to_wuxing();
	let same_polarity = rizhu.0 % 2 == other.0 % 2;

	if day as u8 == target as u8 {
		if same_polarity { ShiShen::BiJian } else { ShiShen::JieCai }
	} else if day.is_generating(target) {
		if same_polarity { ShiShen::ShiShen } else { ShiShen::ShangGuan }
	} else if day.is_restricting(target) {
		if same_polarity { ShiShen::PianCai } else { ShiShen::ZhengCai }
	} else if target.is_restricting(day) {
		if same_polarity { ShiShen::QiSha } else { ShiShen::ZhengGuan }
	} else {
		// 剩余唯一关系：生我
		if same_polarity { ShiShen::PianYin } else { ShiShen::ZhengYin }
	}
}

const fn build_shishen_table() -> [[ShiShen; 10]; 10] {
	let mut table = [[ShiShen::BiJian; 10]; 10];
	let mut d = 0;
	while d < 10 {
		let mut o = 0;
		while o < 10 {
			table[d][o] = calculate_shishen(TianGan(d as u8), TianGan(o as u8));
			o += 1;
		}
		d += 1;
	}
	table
}

/// 十神查表（行：日主，列：目标天干）
pub const SHISHEN_TABLE: [[ShiShen; 10]; 10] = build_shishen_table();

/// 查表获取十神
pub fn shishen_of(rizhu: TianGan, other: TianGan) -> ShiShen {
	SHISHEN_TABLE[rizhu.0 as usize][other.0 as usize]
}

/// 单个十神的统计
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiShenStat {
	pub shishen: ShiShen,
	pub count: u8,
	/// 出现的天干位置（年干/月干/日干/时干）
	pub positions: Vec<SiZhuPosition>,
}

/// 四柱天干十神汇总
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiShenSummary {
	/// 按十神顺序排列，仅含出现过的十神
	pub gods: Vec<ShiShenStat>,
}

impl ShiShenSummary {
	pub fn get(&self, shishen: ShiShen) -> Option<&ShiShenStat> {
		self.gods.iter().find(|s| s.shishen == shishen)
	}

	pub fn count_of(&self, shishen: ShiShen) -> u8 {
		self.get(shishen).map(|s| s.count).unwrap_or(0)
	}

	/// 全部计入的天干数
	pub fn total(&self) -> u8 {
		self.gods.iter().map(|s| s.count).sum()
	}
}

/// 统计四柱天干（含日干）的十神分布
pub fn summarize_shishen(sizhu: &SiZhu) -> ShiShenSummary {
	let mut gods: Vec<ShiShenStat> = Vec::new();

	for zhu in sizhu.zhus() {
		let shishen = shishen_of(sizhu.rizhu, zhu.ganzhi.gan);
		match gods.iter_mut().find(|s| s.shishen == shishen) {
			Some(stat) => {
				stat.count += 1;
				stat.positions.push(zhu.position);
			},
			None => gods.push(ShiShenStat { shishen, count: 1, positions: [zhu.position].to_vec() }),
		}
	}

	gods.sort_by_key(|s| s.shishen);
	ShiShenSummary { gods }
}
