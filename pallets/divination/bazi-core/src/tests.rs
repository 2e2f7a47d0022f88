use crate::{mock::*, *};
use codec::{Decode, Encode};

const STRONG_CHART: [&str; 4] = ["庚午", "戊寅", "甲子", "丙寅"];
const FOLLOW_CHART: [&str; 4] = ["辛未", "丁酉", "甲子", "甲子"];
const BALANCED_CHART: [&str; 4] = ["癸亥", "癸酉", "甲寅", "甲子"];

fn strong_input() -> ChartInput {
	chart_input(STRONG_CHART, "马", 1990, 3, DaYunDirection::Shun)
}

#[test]
fn full_profile_for_strong_chart() {
	let p = BaziEngine::<Test>::calculate(&strong_input()).unwrap();

	assert_eq!(p.sizhu.rizhu, TianGan(0));
	assert_eq!(p.rizhu.de_ling, DeLing::DangLing);
	assert_eq!(p.rizhu.total, 600);
	assert_eq!(p.rizhu.strength, RiZhuStrength::Strong);

	assert_eq!(p.wuxing.magnitudes, [3300, 2520, 850, 700, 1000]);
	assert_eq!(p.wuxing.strongest, WuXing::Mu);
	assert_eq!(p.wuxing.favorable, vec![WuXing::Tu]);

	assert_eq!(p.geju.kind, GeJuKind::JianLu);
	assert_eq!(p.geju.name(), "建禄格");

	let traits: Vec<Vec<u8>> = ["仁慈正直", "进取心强", "有领导才能", "性格直率"]
		.iter()
		.map(|t| t.as_bytes().to_vec())
		.collect();
	assert_eq!(p.characteristics, traits);
	assert_eq!(p.rizhu.de_ling_desc, "日主当令".as_bytes().to_vec());
	assert_eq!(p.zodiac, "马".as_bytes().to_vec());
	assert_eq!(p.sizhu.year_zhu.zhi().shengxiao(), "马");
}

#[test]
fn calendar_labels_pass_through() {
	let p = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	assert_eq!(p.sizhu.year_zhu.nayin, "路旁土".as_bytes().to_vec());
	assert_eq!(p.sizhu.year_zhu.xunkong, Some([DiZhi(10), DiZhi(11)]));
	// 甲子旬空戌亥，戊寅属甲戌旬空申酉
	assert_eq!(p.sizhu.month_zhu.xunkong, Some([DiZhi(8), DiZhi(9)]));
}

#[test]
fn ten_gods_summary_counts_every_stem() {
	let p = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	let s = &p.shishen;
	assert_eq!(s.total(), 4);
	assert_eq!(s.get(ShiShen::QiSha).map(|x| x.positions.clone()), Some(vec![SiZhuPosition::Year]));
	assert_eq!(s.get(ShiShen::PianCai).map(|x| x.positions.clone()), Some(vec![SiZhuPosition::Month]));
	assert_eq!(s.get(ShiShen::BiJian).map(|x| x.positions.clone()), Some(vec![SiZhuPosition::Day]));
	assert_eq!(s.get(ShiShen::ShiShen).map(|x| x.positions.clone()), Some(vec![SiZhuPosition::Hour]));
	assert_eq!(s.count_of(ShiShen::ZhengYin), 0);
}

#[test]
fn ten_gods_always_cover_four_stems() {
	for y in (0..60u8).step_by(5) {
		for d in 0..60u8 {
			let input = SiZhuInput {
				year: ZhuInput::from_index(y).unwrap(),
				month: ZhuInput::from_index((y + 2) % 60).unwrap(),
				day: ZhuInput::from_index(d).unwrap(),
				hour: ZhuInput::from_index((d + 13) % 60).unwrap(),
			};
			let summary = summarize_shishen(&build_sizhu(&input));
			assert_eq!(summary.total(), 4);
			let positions: usize = summary.gods.iter().map(|g| g.positions.len()).sum();
			assert_eq!(positions, 4);
			assert!(summary.count_of(ShiShen::BiJian) >= 1);
		}
	}
}

#[test]
fn dayun_projection_skips_failed_year() {
	let p = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	assert_eq!(p.dayun.dayun.len(), 10);
	let first = &p.dayun.dayun[0];
	assert_eq!(first.ganzhi, GanZhi::parse("己卯").unwrap());
	assert_eq!((first.start_year, first.end_year), (1993, 2002));
	assert_eq!(first.liunian.len(), 9);
	assert_eq!(first.liunian[0].ganzhi, GanZhi::parse("癸酉").unwrap());
}

#[test]
fn shensha_capability_is_selected_by_config() {
	let p = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	let set = p.shensha.unwrap();
	// 日支子驿马在寅
	assert_eq!(set.month, vec![ShenSha::YiMa]);
	assert_eq!(set.hour, vec![ShenSha::YiMa]);

	let legacy = BaziEngine::<TestLegacy>::calculate(&strong_input()).unwrap();
	assert_eq!(legacy.shensha, None);

	assert_eq!(p.capabilities, CapabilityVersions { calendar: 1, shensha: 1 });
	assert_eq!(legacy.capabilities, CapabilityVersions { calendar: 1, shensha: 0 });
}

#[test]
fn legacy_profile_changes_calibration() {
	let p = BaziEngine::<TestLegacy>::calculate(&strong_input()).unwrap();
	// 得地：寅甲 9 + 子癸 10 + 寅甲 9
	assert_eq!(p.rizhu.de_di_score, 28);
	assert_eq!(p.rizhu.total, 348);
	assert_eq!(p.rizhu.strength, RiZhuStrength::Weak);
	assert_eq!(p.wuxing.favorable, vec![WuXing::Mu, WuXing::Shui]);
	assert_eq!(p.wuxing.magnitude(WuXing::Mu), 2200);
	// 月令建禄不受方案影响
	assert_eq!(p.geju.kind, GeJuKind::JianLu);
	assert_eq!(p.dayun.dayun.len(), 8);
}

#[test]
fn follow_pattern_end_to_end() {
	let input = chart_input(FOLLOW_CHART, "羊", 1991, 6, DaYunDirection::Ni);
	let p = BaziEngine::<Test>::calculate(&input).unwrap();
	assert_eq!(p.rizhu.total, 80);
	assert_eq!(p.geju.kind, GeJuKind::CongGuan);
	assert_eq!(p.geju.category(), GeJuCategory::Special);
	// 逆排：丁酉 -> 丙申
	assert_eq!(p.dayun.dayun[0].ganzhi, GanZhi::parse("丙申").unwrap());
}

#[test]
fn balanced_chart_end_to_end() {
	let input = chart_input(BALANCED_CHART, "猪", 1983, 2, DaYunDirection::Shun);
	let p = BaziEngine::<Test>::calculate(&input).unwrap();
	assert_eq!(p.rizhu.de_di_score, 300);
	assert_eq!(p.rizhu.tiangan_help_score, 200);
	assert_eq!(p.rizhu.strength, RiZhuStrength::Balanced);
	assert!(p.wuxing.favorable.is_empty() && p.wuxing.unfavorable.is_empty());
	assert_eq!(p.geju.kind, GeJuKind::ZhengGuan);
}

#[test]
fn calculation_is_deterministic() {
	let a = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	let b = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	assert_eq!(a, b);
}

#[test]
fn too_many_dayun_pillars_is_rejected() {
	let mut input = strong_input();
	input.dayun.pillars = vec![GanZhi::parse("己卯").unwrap(); 11];
	assert_eq!(BaziEngine::<Test>::calculate(&input), Err(BaziError::TooManyDaYunSteps));
}

#[test]
fn mismatched_pillar_is_rejected() {
	let mut input = strong_input();
	// 甲丑阴阳不配
	input.sizhu.month.ganzhi = GanZhi { gan: TianGan(0), zhi: DiZhi(1) };
	assert_eq!(BaziEngine::<Test>::calculate(&input), Err(BaziError::InvalidGanZhi));
}

#[test]
fn decoded_out_of_range_stem_is_rejected() {
	let mut input = strong_input();
	input.sizhu.year.ganzhi = GanZhi { gan: TianGan(12), zhi: DiZhi(0) };
	let encoded = input.encode();
	let decoded = ChartInput::decode(&mut &encoded[..]).unwrap();
	assert_eq!(BaziEngine::<Test>::calculate(&decoded), Err(BaziError::InvalidTianGan));

	let mut input = strong_input();
	input.dayun.pillars = vec![GanZhi { gan: TianGan(1), zhi: DiZhi(14) }];
	assert_eq!(BaziEngine::<Test>::calculate(&input), Err(BaziError::InvalidDiZhi));
}

#[test]
fn legacy_roots_are_not_truncated() {
	let input = chart_input(["丙午", "甲午", "丙午", "甲午"], "马", 1966, 4, DaYunDirection::Shun);
	let p = BaziEngine::<TestLegacy>::calculate(&input).unwrap();
	assert_eq!(p.rizhu.de_di_score, 42);
	assert_eq!(p.rizhu.total, p.rizhu.de_ling_score + 42 + p.rizhu.tiangan_help_score);
}

#[test]
fn profile_scale_roundtrip() {
	let p = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	let encoded = p.encode();
	assert_eq!(BaziProfile::decode(&mut &encoded[..]).unwrap(), p);
}

#[test]
fn profile_serializes_to_json() {
	let p = BaziEngine::<Test>::calculate(&strong_input()).unwrap();
	let json = serde_json::to_string(&p).unwrap();
	assert!(json.contains("\"JianLu\""));
	assert!(json.contains("\"DangLing\""));
	assert!(json.contains("\"characteristics\""));
	assert!(json.contains("\"de_ling_desc\""));
	assert!(json.contains("\"tiangan_help_desc\""));
	let back: BaziProfile = serde_json::from_str(&json).unwrap();
	assert_eq!(back, p);
}
