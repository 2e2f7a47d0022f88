//! # 八字基础类型
//!
//! ## 天干地支索引
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)
//!
//! 五行按相生顺序编号：木(0) 火(1) 土(2) 金(3) 水(4)，
//! 因此 `i` 生 `(i + 1) % 5`，`i` 克 `(i + 2) % 5`。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;

use crate::constants::{DIZHI_NAMES, DIZHI_WUXING, SHENGXIAO_NAMES, TIANGAN_NAMES, TIANGAN_WUXING};

// ============================================================================
// 五行 / 阴阳
// ============================================================================

/// 五行
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	PartialOrd, Ord, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WuXing {
	/// 木
	Mu = 0,
	/// 火
	Huo = 1,
	/// 土
	Tu = 2,
	/// 金
	Jin = 3,
	/// 水
	Shui = 4,
}

impl WuXing {
	/// 相生顺序的全部五行
	pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn from_index(index: usize) -> Option<Self> {
		match index {
			0 => Some(WuXing::Mu),
			1 => Some(WuXing::Huo),
			2 => Some(WuXing::Tu),
			3 => Some(WuXing::Jin),
			4 => Some(WuXing::Shui),
			_ => None,
		}
	}

	const fn offset(self, step: usize) -> Self {
		match Self::from_index((self as usize + step) % 5) {
			Some(w) => w,
			None => self,
		}
	}

	/// 我生者（木生火）
	pub const fn generates(self) -> Self {
		self.offset(1)
	}

	/// 生我者（水生木）
	pub const fn generated_by(self) -> Self {
		self.offset(4)
	}

	/// 我克者（木克土）
	pub const fn restricts(self) -> Self {
		self.offset(2)
	}

	/// 克我者（金克木）
	pub const fn restricted_by(self) -> Self {
		self.offset(3)
	}

	/// `self` 是否生 `other`
	pub const fn is_generating(self, other: WuXing) -> bool {
		self.generates() as u8 == other as u8
	}

	/// `self` 是否克 `other`
	pub const fn is_restricting(self, other: WuXing) -> bool {
		self.restricts() as u8 == other as u8
	}

	/// 中文名称
	pub fn name(&self) -> &'static str {
		match self {
			WuXing::Mu => "木",
			WuXing::Huo => "火",
			WuXing::Tu => "土",
			WuXing::Jin => "金",
			WuXing::Shui => "水",
		}
	}
}

/// 阴阳
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum YinYang {
	Yang = 0,
	Yin = 1,
}

// ============================================================================
// 天干 / 地支 / 干支
// ============================================================================

/// 天干（0-9）
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	PartialOrd, Ord, Hash, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TianGan(pub u8);

impl TianGan {
	pub const fn new(index: u8) -> Option<Self> {
		if index < 10 {
			Some(TianGan(index))
		} else {
			None
		}
	}

	/// 从汉字解析，如 '甲'
	pub fn from_char(c: char) -> Option<Self> {
		TIANGAN_NAMES
			.iter()
			.position(|name| name.chars().next() == Some(c))
			.map(|i| TianGan(i as u8))
	}

	/// 天干五行
	pub const fn to_wuxing(self) -> WuXing {
		TIANGAN_WUXING[self.0 as usize]
	}

	/// 天干阴阳（偶数为阳）
	pub const fn yin_yang(self) -> YinYang {
		if self.0 % 2 == 0 {
			YinYang::Yang
		} else {
			YinYang::Yin
		}
	}

	pub fn name(&self) -> &'static str {
		TIANGAN_NAMES[self.0 as usize]
	}
}

/// 地支（0-11）
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	PartialOrd, Ord, Hash, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DiZhi(pub u8);

impl DiZhi {
	pub const fn new(index: u8) -> Option<Self> {
		if index < 12 {
			Some(DiZhi(index))
		} else {
			None
		}
	}

	/// 从汉字解析，如 '子'
	pub fn from_char(c: char) -> Option<Self> {
		DIZHI_NAMES
			.iter()
			.position(|name| name.chars().next() == Some(c))
			.map(|i| DiZhi(i as u8))
	}

	/// 地支本气五行
	pub const fn to_wuxing(self) -> WuXing {
		DIZHI_WUXING[self.0 as usize]
	}

	/// 地支阴阳（子寅辰午申戌为阳）
	pub const fn yin_yang(self) -> YinYang {
		if self.0 % 2 == 0 {
			YinYang::Yang
		} else {
			YinYang::Yin
		}
	}

	pub fn name(&self) -> &'static str {
		DIZHI_NAMES[self.0 as usize]
	}

	/// 对应生肖
	pub fn shengxiao(&self) -> &'static str {
		SHENGXIAO_NAMES[self.0 as usize]
	}
}

/// 干支组合（六十甲子之一）
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GanZhi {
	pub gan: TianGan,
	pub zhi: DiZhi,
}

impl GanZhi {
	/// 组合天干地支，阴阳不一致（如甲丑）时返回 None
	pub const fn new(gan: TianGan, zhi: DiZhi) -> Option<Self> {
		if gan.0 < 10 && zhi.0 < 12 && gan.0 % 2 == zhi.0 % 2 {
			Some(GanZhi { gan, zhi })
		} else {
			None
		}
	}

	/// 从六十甲子序号（0=甲子 … 59=癸亥）构建
	pub const fn from_index(index: u8) -> Option<Self> {
		if index >= 60 {
			return None;
		}
		Some(GanZhi { gan: TianGan(index % 10), zhi: DiZhi(index % 12) })
	}

	/// 六十甲子序号
	pub const fn to_index(&self) -> u8 {
		((6 * self.gan.0 as i32 - 5 * self.zhi.0 as i32 + 60) % 60) as u8
	}

	/// 从两个汉字解析，如 "甲子"
	pub fn parse(s: &str) -> Option<Self> {
		let mut chars = s.chars();
		let gan = TianGan::from_char(chars.next()?)?;
		let zhi = DiZhi::from_char(chars.next()?)?;
		if chars.next().is_some() {
			return None;
		}
		Self::new(gan, zhi)
	}

	/// 六十甲子中的下一位
	pub const fn next(&self) -> Self {
		GanZhi { gan: TianGan((self.gan.0 + 1) % 10), zhi: DiZhi((self.zhi.0 + 1) % 12) }
	}

	/// 六十甲子中的上一位
	pub const fn prev(&self) -> Self {
		GanZhi { gan: TianGan((self.gan.0 + 9) % 10), zhi: DiZhi((self.zhi.0 + 11) % 12) }
	}
}

// ============================================================================
// 十神
// ============================================================================

/// 十神
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	PartialOrd, Ord, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiShen {
	/// 比肩：同我同性
	BiJian = 0,
	/// 劫财：同我异性
	JieCai = 1,
	/// 食神：我生同性
	ShiShen = 2,
	/// 伤官：我生异性
	ShangGuan = 3,
	/// 偏财：我克同性
	PianCai = 4,
	/// 正财：我克异性
	ZhengCai = 5,
	/// 七杀：克我同性
	QiSha = 6,
	/// 正官：克我异性
	ZhengGuan = 7,
	/// 偏印：生我同性
	PianYin = 8,
	/// 正印：生我异性
	ZhengYin = 9,
}

impl ShiShen {
	pub const ALL: [ShiShen; 10] = [
		ShiShen::BiJian,
		ShiShen::JieCai,
		ShiShen::ShiShen,
		ShiShen::ShangGuan,
		ShiShen::PianCai,
		ShiShen::ZhengCai,
		ShiShen::QiSha,
		ShiShen::ZhengGuan,
		ShiShen::PianYin,
		ShiShen::ZhengYin,
	];

	pub fn name(&self) -> &'static str {
		match self {
			ShiShen::BiJian => "比肩",
			ShiShen::JieCai => "劫财",
			ShiShen::ShiShen => "食神",
			ShiShen::ShangGuan => "伤官",
			ShiShen::PianCai => "偏财",
			ShiShen::ZhengCai => "正财",
			ShiShen::QiSha => "七杀",
			ShiShen::ZhengGuan => "正官",
			ShiShen::PianYin => "偏印",
			ShiShen::ZhengYin => "正印",
		}
	}
}

// ============================================================================
// 藏干 / 四柱位置
// ============================================================================

/// 藏干类型
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CangGanType {
	/// 本气
	ZhuQi = 0,
	/// 中气
	ZhongQi = 1,
	/// 余气
	YuQi = 2,
}

/// 藏干表条目：天干 + 权重（千分比，同一地支合计 1000）
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct CangGan {
	pub gan: TianGan,
	pub canggan_type: CangGanType,
	pub weight: u16,
}

impl CangGan {
	pub const fn new(gan: u8, canggan_type: CangGanType, weight: u16) -> Self {
		CangGan { gan: TianGan(gan), canggan_type, weight }
	}
}

/// 四柱位置
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	PartialOrd, Ord, RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SiZhuPosition {
	Year = 0,
	Month = 1,
	Day = 2,
	Hour = 3,
}

impl SiZhuPosition {
	pub const ALL: [SiZhuPosition; 4] =
		[SiZhuPosition::Year, SiZhuPosition::Month, SiZhuPosition::Day, SiZhuPosition::Hour];

	/// 天干位置名称（年干/月干/日干/时干）
	pub fn gan_name(&self) -> &'static str {
		match self {
			SiZhuPosition::Year => "年干",
			SiZhuPosition::Month => "月干",
			SiZhuPosition::Day => "日干",
			SiZhuPosition::Hour => "时干",
		}
	}

	/// 地支位置名称（年支/月支/日支/时支）
	pub fn zhi_name(&self) -> &'static str {
		match self {
			SiZhuPosition::Year => "年支",
			SiZhuPosition::Month => "月支",
			SiZhuPosition::Day => "日支",
			SiZhuPosition::Hour => "时支",
		}
	}
}

// ============================================================================
// 分析结果枚举
// ============================================================================

/// 日主强弱
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RiZhuStrength {
	/// 身弱
	Weak = 0,
	/// 中和
	Balanced = 1,
	/// 身强
	Strong = 2,
}

impl RiZhuStrength {
	pub fn name(&self) -> &'static str {
		match self {
			RiZhuStrength::Weak => "身弱",
			RiZhuStrength::Balanced => "中和",
			RiZhuStrength::Strong => "身强",
		}
	}
}

/// 五行旺衰（旺相休囚死）
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WangShuai {
	/// 旺：与月令同类
	Wang = 0,
	/// 相：月令所生
	Xiang = 1,
	/// 休：生月令者
	Xiu = 2,
	/// 囚：克月令者
	Qiu = 3,
	/// 死：月令所克
	Si = 4,
}

impl WangShuai {
	pub fn name(&self) -> &'static str {
		match self {
			WangShuai::Wang => "旺",
			WangShuai::Xiang => "相",
			WangShuai::Xiu => "休",
			WangShuai::Qiu => "囚",
			WangShuai::Si => "死",
		}
	}
}

/// 大运排列方向
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum DaYunDirection {
	/// 顺排
	#[default]
	Shun = 0,
	/// 逆排
	Ni = 1,
}
