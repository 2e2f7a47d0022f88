//! # 神煞
//!
//! 神煞属于可选能力，由 `Config::ShenSha` 静态选定：
//! - `()`：不提供神煞（结果为 `None`）
//! - `TaoHuaYiMa`：内置的桃花、驿马推算（以年支、日支三合局查四支）

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use super::sizhu::SiZhu;
use crate::{
	constants::{TAOHUA_ZHI, YIMA_ZHI},
	types::{DiZhi, SiZhuPosition},
};

/// 神煞
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShenSha {
	/// 桃花（咸池）
	TaoHua,
	/// 驿马
	YiMa,
}

impl ShenSha {
	pub fn name(&self) -> &'static str {
		match self {
			ShenSha::TaoHua => "桃花",
			ShenSha::YiMa => "驿马",
		}
	}
}

/// 四柱神煞
#[derive(
	Clone, Default, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShenShaSet {
	pub year: Vec<ShenSha>,
	pub month: Vec<ShenSha>,
	pub day: Vec<ShenSha>,
	pub hour: Vec<ShenSha>,
}

impl ShenShaSet {
	pub fn at(&self, position: SiZhuPosition) -> &[ShenSha] {
		match position {
			SiZhuPosition::Year => &self.year,
			SiZhuPosition::Month => &self.month,
			SiZhuPosition::Day => &self.day,
			SiZhuPosition::Hour => &self.hour,
		}
	}

	fn at_mut(&mut self, position: SiZhuPosition) -> &mut Vec<ShenSha> {
		match position {
			SiZhuPosition::Year => &mut self.year,
			SiZhuPosition::Month => &mut self.month,
			SiZhuPosition::Day => &mut self.day,
			SiZhuPosition::Hour => &mut self.hour,
		}
	}
}

/// 神煞能力
pub trait ShenShaProvider {
	/// 能力版本号，0 表示未提供
	const CAPABILITY_VERSION: u32;

	fn shensha(sizhu: &SiZhu) -> Option<ShenShaSet>;
}

impl ShenShaProvider for () {
	const CAPABILITY_VERSION: u32 = 0;

	fn shensha(_sizhu: &SiZhu) -> Option<ShenShaSet> {
		None
	}
}

/// 内置桃花、驿马
pub struct TaoHuaYiMa;

impl TaoHuaYiMa {
	fn hits(table: &[DiZhi; 12], year_zhi: DiZhi, day_zhi: DiZhi, zhi: DiZhi) -> bool {
		zhi == table[year_zhi.0 as usize] || zhi == table[day_zhi.0 as usize]
	}
}

impl ShenShaProvider for TaoHuaYiMa {
	const CAPABILITY_VERSION: u32 = 1;

	fn shensha(sizhu: &SiZhu) -> Option<ShenShaSet> {
		let year_zhi = sizhu.year_zhu.zhi();
		let day_zhi = sizhu.day_zhu.zhi();
		let mut set = ShenShaSet::default();

		for zhu in sizhu.zhus() {
			let zhi = zhu.zhi();
			let marks = set.at_mut(zhu.position);
			if Self::hits(&TAOHUA_ZHI, year_zhi, day_zhi, zhi) {
				marks.push(ShenSha::TaoHua);
			}
			if Self::hits(&YIMA_ZHI, year_zhi, day_zhi, zhi) {
				marks.push(ShenSha::YiMa);
			}
		}

		Some(set)
	}
}
