//! 测试用 mock 配置

use crate::{
	self as pallet_bazi_core,
	calculations::{build_sizhu, SiZhu, SiZhuInput, TaoHuaYiMa, ZhuInput},
	calendar::{CycleYearCalendar, SexagenaryCalendar},
	error::CalendarError,
	profile::{LegacyProfile, SeasonalProfile},
	types::{DaYunDirection, DiZhi, GanZhi},
	ChartInput, DaYunInput,
};
use frame_support::{parameter_types, traits::ConstU32};

parameter_types! {
	/// 模拟历法在该年查询失败
	pub const FailingYear: u16 = 2000;
}

/// 模拟历法：`FailingYear` 年返回错误，其余委托给 `CycleYearCalendar`
pub struct MockCalendar;

impl SexagenaryCalendar for MockCalendar {
	const CAPABILITY_VERSION: u32 = 1;

	fn year_ganzhi_exact(year: u16, month: u8, day: u8) -> Result<GanZhi, CalendarError> {
		if year == FailingYear::get() {
			return Err(CalendarError::Unavailable);
		}
		CycleYearCalendar::year_ganzhi_exact(year, month, day)
	}
}

/// 默认配置：旺衰加权方案 + 桃花驿马
pub struct Test;

impl pallet_bazi_core::Config for Test {
	type Calendar = MockCalendar;
	type ShenSha = TaoHuaYiMa;
	type Profile = SeasonalProfile;
	type MaxDaYunSteps = ConstU32<10>;
}

/// 早期方案：平权 + 无神煞
pub struct TestLegacy;

impl pallet_bazi_core::Config for TestLegacy {
	type Calendar = CycleYearCalendar;
	type ShenSha = ();
	type Profile = LegacyProfile;
	type MaxDaYunSteps = ConstU32<8>;
}

const NAYIN: [&str; 30] = [
	"海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
	"泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木", "壁上土", "金箔金",
	"覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// 模拟提供方给出的单柱：附纳音与旬空
pub fn zhu_input(s: &str) -> ZhuInput {
	let gz = GanZhi::parse(s).expect("valid ganzhi");
	let xunshou = (gz.zhi.0 + 12 - gz.gan.0) % 12;
	ZhuInput {
		ganzhi: gz,
		nayin: NAYIN[(gz.to_index() / 2) as usize].as_bytes().to_vec(),
		xunkong: Some([DiZhi((xunshou + 10) % 12), DiZhi((xunshou + 11) % 12)]),
	}
}

pub fn sizhu_input(pillars: [&str; 4]) -> SiZhuInput {
	SiZhuInput {
		year: zhu_input(pillars[0]),
		month: zhu_input(pillars[1]),
		day: zhu_input(pillars[2]),
		hour: zhu_input(pillars[3]),
	}
}

pub fn sizhu_of(pillars: [&str; 4]) -> SiZhu {
	build_sizhu(&sizhu_input(pillars))
}

pub fn chart_input(
	pillars: [&str; 4],
	zodiac: &str,
	birth_year: u16,
	start_age: u16,
	direction: DaYunDirection,
) -> ChartInput {
	ChartInput {
		sizhu: sizhu_input(pillars),
		zodiac: zodiac.as_bytes().to_vec(),
		dayun: DaYunInput { birth_year, start_age, direction, pillars: Default::default() },
	}
}
