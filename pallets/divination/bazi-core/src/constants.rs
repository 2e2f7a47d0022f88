//! # 八字常量表
//!
//! 进程级只读数据：天干地支名称与五行、地支藏干（含权重）、
//! 建禄/羊刃对照、日主特征以及神煞三合局对照。
//!
//! 所有表格均为编译期常量，运行期不可修改。

use crate::types::{CangGan, CangGanType::*, DiZhi, WuXing};

/// 天干名称
pub const TIANGAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 地支名称
pub const DIZHI_NAMES: [&str; 12] =
	["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

/// 生肖（按地支顺序）
pub const SHENGXIAO_NAMES: [&str; 12] =
	["鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪"];

/// 天干五行：甲乙木、丙丁火、戊己土、庚辛金、壬癸水
pub const TIANGAN_WUXING: [WuXing; 10] = [
	WuXing::Mu,
	WuXing::Mu,
	WuXing::Huo,
	WuXing::Huo,
	WuXing::Tu,
	WuXing::Tu,
	WuXing::Jin,
	WuXing::Jin,
	WuXing::Shui,
	WuXing::Shui,
];

/// 地支本气五行
pub const DIZHI_WUXING: [WuXing; 12] = [
	WuXing::Shui, // 子
	WuXing::Tu,   // 丑
	WuXing::Mu,   // 寅
	WuXing::Mu,   // 卯
	WuXing::Tu,   // 辰
	WuXing::Huo,  // 巳
	WuXing::Huo,  // 午
	WuXing::Tu,   // 未
	WuXing::Jin,  // 申
	WuXing::Jin,  // 酉
	WuXing::Tu,   // 戌
	WuXing::Shui, // 亥
];

/// 藏干权重满值（千分比）
pub const CANGGAN_WEIGHT_TOTAL: u16 = 1000;

/// 地支藏干表（本气在前，权重为千分比）
///
/// 辰藏干采用"戊乙癸"。
pub const DIZHI_CANGGAN: [&[CangGan]; 12] = [
	// 子：癸
	&[CangGan::new(9, ZhuQi, 1000)],
	// 丑：己癸辛
	&[CangGan::new(5, ZhuQi, 600), CangGan::new(9, ZhongQi, 200), CangGan::new(7, YuQi, 200)],
	// 寅：甲丙戊
	&[CangGan::new(0, ZhuQi, 600), CangGan::new(2, ZhongQi, 200), CangGan::new(4, YuQi, 200)],
	// 卯：乙
	&[CangGan::new(1, ZhuQi, 1000)],
	// 辰：戊乙癸
	&[CangGan::new(4, ZhuQi, 600), CangGan::new(1, ZhongQi, 200), CangGan::new(9, YuQi, 200)],
	// 巳：丙庚戊
	&[CangGan::new(2, ZhuQi, 600), CangGan::new(6, ZhongQi, 200), CangGan::new(4, YuQi, 200)],
	// 午：丁己
	&[CangGan::new(3, ZhuQi, 700), CangGan::new(5, ZhongQi, 300)],
	// 未：己丁乙
	&[CangGan::new(5, ZhuQi, 600), CangGan::new(3, ZhongQi, 200), CangGan::new(1, YuQi, 200)],
	// 申：庚壬戊
	&[CangGan::new(6, ZhuQi, 600), CangGan::new(8, ZhongQi, 200), CangGan::new(4, YuQi, 200)],
	// 酉：辛
	&[CangGan::new(7, ZhuQi, 1000)],
	// 戌：戊辛丁
	&[CangGan::new(4, ZhuQi, 600), CangGan::new(7, ZhongQi, 200), CangGan::new(3, YuQi, 200)],
	// 亥：壬甲
	&[CangGan::new(8, ZhuQi, 700), CangGan::new(0, ZhongQi, 300)],
];

/// 获取地支藏干（按权重降序）
pub fn get_hidden_stems(zhi: DiZhi) -> &'static [CangGan] {
	DIZHI_CANGGAN[zhi.0 as usize]
}

/// 建禄对照：日干 -> 禄支
pub const JIANLU_ZHI: [DiZhi; 10] = [
	DiZhi(2),  // 甲禄在寅
	DiZhi(3),  // 乙禄在卯
	DiZhi(5),  // 丙禄在巳
	DiZhi(6),  // 丁禄在午
	DiZhi(5),  // 戊禄在巳
	DiZhi(6),  // 己禄在午
	DiZhi(8),  // 庚禄在申
	DiZhi(9),  // 辛禄在酉
	DiZhi(11), // 壬禄在亥
	DiZhi(0),  // 癸禄在子
];

/// 羊刃对照：日干 -> 刃支
pub const YANGREN_ZHI: [DiZhi; 10] = [
	DiZhi(3),  // 甲刃在卯
	DiZhi(2),  // 乙刃在寅
	DiZhi(6),  // 丙刃在午
	DiZhi(5),  // 丁刃在巳
	DiZhi(6),  // 戊刃在午
	DiZhi(5),  // 己刃在巳
	DiZhi(9),  // 庚刃在酉
	DiZhi(8),  // 辛刃在申
	DiZhi(0),  // 壬刃在子
	DiZhi(11), // 癸刃在亥
];

/// 日主特征（按日干）
pub const RIZHU_TEZHENG: [[&str; 4]; 10] = [
	["仁慈正直", "进取心强", "有领导才能", "性格直率"],
	["温和体贴", "灵活变通", "艺术才华", "优柔寡断"],
	["热情开朗", "积极向上", "富有激情", "易冲动"],
	["细腻敏感", "思维敏捷", "重视精神", "情绪波动"],
	["稳重踏实", "包容性强", "诚信可靠", "固执保守"],
	["细心谨慎", "善于理财", "内敛含蓄", "多虑"],
	["刚毅果断", "执行力强", "讲究原则", "不够圆滑"],
	["细致精巧", "品味高雅", "自尊心强", "敏感脆弱"],
	["智慧聪明", "应变能力强", "善于交际", "缺乏恒心"],
	["柔和内敛", "直觉敏锐", "富有同情心", "容易悲观"],
];

/// 桃花：以年支/日支所在三合局查
///
/// 寅午戌见卯、申子辰见酉、巳酉丑见午、亥卯未见子
pub const TAOHUA_ZHI: [DiZhi; 12] = [
	DiZhi(9), // 子 -> 酉
	DiZhi(6), // 丑 -> 午
	DiZhi(3), // 寅 -> 卯
	DiZhi(0), // 卯 -> 子
	DiZhi(9), // 辰 -> 酉
	DiZhi(6), // 巳 -> 午
	DiZhi(3), // 午 -> 卯
	DiZhi(0), // 未 -> 子
	DiZhi(9), // 申 -> 酉
	DiZhi(6), // 酉 -> 午
	DiZhi(3), // 戌 -> 卯
	DiZhi(0), // 亥 -> 子
];

/// 驿马：寅午戌马在申、申子辰马在寅、巳酉丑马在亥、亥卯未马在巳
pub const YIMA_ZHI: [DiZhi; 12] = [
	DiZhi(2),  // 子 -> 寅
	DiZhi(11), // 丑 -> 亥
	DiZhi(8),  // 寅 -> 申
	DiZhi(5),  // 卯 -> 巳
	DiZhi(2),  // 辰 -> 寅
	DiZhi(11), // 巳 -> 亥
	DiZhi(8),  // 午 -> 申
	DiZhi(5),  // 未 -> 巳
	DiZhi(2),  // 申 -> 寅
	DiZhi(11), // 酉 -> 亥
	DiZhi(8),  // 戌 -> 申
	DiZhi(5),  // 亥 -> 巳
];
