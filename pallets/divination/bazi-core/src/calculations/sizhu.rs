//! # 四柱组装
//!
//! 把历法提供方交来的四组干支（含纳音、空亡）组装成 `SiZhu`：
//! 为每柱附上地支藏干（五行、阴阳、权重、十神）以及天干十神。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use super::shishen::shishen_of;
use crate::{
	constants::get_hidden_stems,
	error::BaziError,
	types::{CangGanType, DiZhi, GanZhi, ShiShen, SiZhuPosition, TianGan, WuXing, YinYang},
};

/// 单柱输入（来自历法提供方）
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ZhuInput {
	pub ganzhi: GanZhi,
	/// 纳音名称（UTF-8）
	pub nayin: Vec<u8>,
	/// 旬空地支
	pub xunkong: Option<[DiZhi; 2]>,
}

impl ZhuInput {
	pub fn new(ganzhi: GanZhi) -> Self {
		Self { ganzhi, nayin: Vec::new(), xunkong: None }
	}

	/// 解析提供方给出的原始符号，如 ("庚午", "路旁土", "戌亥")
	///
	/// `xunkong` 为空串表示未提供。
	pub fn parse(ganzhi: &str, nayin: &str, xunkong: &str) -> Result<Self, BaziError> {
		let ganzhi = parse_ganzhi(ganzhi)?;

		let xunkong = if xunkong.is_empty() {
			None
		} else {
			let mut chars = xunkong.chars();
			let first = chars.next().and_then(DiZhi::from_char).ok_or(BaziError::InvalidDiZhi)?;
			let second = chars.next().and_then(DiZhi::from_char).ok_or(BaziError::InvalidDiZhi)?;
			if chars.next().is_some() {
				return Err(BaziError::InvalidDiZhi);
			}
			Some([first, second])
		};

		Ok(Self { ganzhi, nayin: nayin.as_bytes().to_vec(), xunkong })
	}

	/// 从六十甲子序号构建
	pub fn from_index(index: u8) -> Result<Self, BaziError> {
		GanZhi::from_index(index).map(Self::new).ok_or(BaziError::InvalidGanZhiIndex)
	}

	pub fn validate(&self) -> Result<(), BaziError> {
		check_ganzhi(self.ganzhi)?;
		if let Some(xunkong) = self.xunkong {
			for zhi in xunkong {
				DiZhi::new(zhi.0).ok_or(BaziError::InvalidDiZhi)?;
			}
		}
		Ok(())
	}
}

/// 校验解码得到的干支（SCALE/serde 输入不经过 `parse_ganzhi`）
pub fn check_ganzhi(gz: GanZhi) -> Result<GanZhi, BaziError> {
	TianGan::new(gz.gan.0).ok_or(BaziError::InvalidTianGan)?;
	DiZhi::new(gz.zhi.0).ok_or(BaziError::InvalidDiZhi)?;
	GanZhi::new(gz.gan, gz.zhi).ok_or(BaziError::InvalidGanZhi)
}

/// 解析两字干支，区分天干/地支/组合错误
pub fn parse_ganzhi(s: &str) -> Result<GanZhi, BaziError> {
	let mut chars = s.chars();
	let gan = chars.next().and_then(TianGan::from_char).ok_or(BaziError::InvalidTianGan)?;
	let zhi = chars.next().and_then(DiZhi::from_char).ok_or(BaziError::InvalidDiZhi)?;
	if chars.next().is_some() {
		return Err(BaziError::InvalidGanZhi);
	}
	GanZhi::new(gan, zhi).ok_or(BaziError::InvalidGanZhi)
}

/// 四柱输入
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SiZhuInput {
	pub year: ZhuInput,
	pub month: ZhuInput,
	pub day: ZhuInput,
	pub hour: ZhuInput,
}

impl SiZhuInput {
	/// 逐柱校验
	pub fn validate(&self) -> Result<(), BaziError> {
		for zhu in [&self.year, &self.month, &self.day, &self.hour] {
			zhu.validate()?;
		}
		Ok(())
	}
}

/// 藏干详情
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CangGanInfo {
	pub gan: TianGan,
	pub wuxing: WuXing,
	pub yin_yang: YinYang,
	pub canggan_type: CangGanType,
	/// 权重（千分比）
	pub weight: u16,
	/// 相对日主的十神
	pub shishen: ShiShen,
}

/// 单柱
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Zhu {
	pub position: SiZhuPosition,
	pub ganzhi: GanZhi,
	/// 天干十神（日柱为比肩）
	pub shishen: ShiShen,
	/// 地支藏干（本气在前）
	pub canggan: Vec<CangGanInfo>,
	pub nayin: Vec<u8>,
	pub xunkong: Option<[DiZhi; 2]>,
}

impl Zhu {
	pub fn gan(&self) -> TianGan {
		self.ganzhi.gan
	}

	pub fn zhi(&self) -> DiZhi {
		self.ganzhi.zhi
	}

	/// 本气藏干
	pub fn primary_canggan(&self) -> Option<&CangGanInfo> {
		self.canggan.first()
	}
}

/// 四柱
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SiZhu {
	pub year_zhu: Zhu,
	pub month_zhu: Zhu,
	pub day_zhu: Zhu,
	pub hour_zhu: Zhu,
	/// 日主（日干）
	pub rizhu: TianGan,
}

impl SiZhu {
	/// 年、月、日、时顺序
	pub fn zhus(&self) -> [&Zhu; 4] {
		[&self.year_zhu, &self.month_zhu, &self.day_zhu, &self.hour_zhu]
	}

	pub fn zhu(&self, position: SiZhuPosition) -> &Zhu {
		match position {
			SiZhuPosition::Year => &self.year_zhu,
			SiZhuPosition::Month => &self.month_zhu,
			SiZhuPosition::Day => &self.day_zhu,
			SiZhuPosition::Hour => &self.hour_zhu,
		}
	}

	/// 月令
	pub fn month_zhi(&self) -> DiZhi {
		self.month_zhu.zhi()
	}

	/// 除日干外的三个天干（年、月、时）
	pub fn other_gans(&self) -> [(SiZhuPosition, TianGan); 3] {
		[
			(SiZhuPosition::Year, self.year_zhu.gan()),
			(SiZhuPosition::Month, self.month_zhu.gan()),
			(SiZhuPosition::Hour, self.hour_zhu.gan()),
		]
	}

	/// 某天干是否透出于年、月、时干
	pub fn is_transparent(&self, gan: TianGan) -> bool {
		self.other_gans().iter().any(|(_, g)| *g == gan)
	}
}

/// 组装单柱
pub fn build_zhu(position: SiZhuPosition, input: &ZhuInput, rizhu: TianGan) -> Zhu {
	let canggan = get_hidden_stems(input.ganzhi.zhi)
		.iter()
		.map(|cg| CangGanInfo {
			gan: cg.gan,
			wuxing: cg.gan.to_wuxing(),
			yin_yang: cg.gan.yin_yang(),
			canggan_type: cg.canggan_type,
			weight: cg.weight,
			shishen: shishen_of(rizhu, cg.gan),
		})
		.collect();

	Zhu {
		position,
		ganzhi: input.ganzhi,
		shishen: shishen_of(rizhu, input.ganzhi.gan),
		canggan,
		nayin: input.nayin.clone(),
		xunkong: input.xunkong,
	}
}

/// 组装四柱，日干即日主
pub fn build_sizhu(input: &SiZhuInput) -> SiZhu {
	let rizhu = input.day.ganzhi.gan;
	SiZhu {
		year_zhu: build_zhu(SiZhuPosition::Year, &input.year, rizhu),
		month_zhu: build_zhu(SiZhuPosition::Month, &input.month, rizhu),
		day_zhu: build_zhu(SiZhuPosition::Day, &input.day, rizhu),
		hour_zhu: build_zhu(SiZhuPosition::Hour, &input.hour, rizhu),
		rizhu,
	}
}
