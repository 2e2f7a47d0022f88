//! # 大运流年
//!
//! 起运岁数与顺逆由外部按性别和年干阴阳给出，大运柱由历法提供方给出。
//! 提供的大运柱不足时，沿六十甲子按方向续排；未提供时从月柱起排。
//!
//! 每步大运十年：
//! - 起止岁数：`起运岁数 + 10i` ～ `起运岁数 + 10i + 9`
//! - 起止年份：出生年 + 岁数
//! - 流年：逐年查询历法（取 7 月 1 日，确保已过立春），
//!   超出历法支持范围的年份直接省略，单年查询失败记录告警后跳过

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

use crate::{
	calculations::sizhu::check_ganzhi,
	calendar::SexagenaryCalendar,
	error::BaziError,
	types::{DaYunDirection, GanZhi},
};

/// 流年查询日期（年中）
pub const LIUNIAN_QUERY_MONTH: u8 = 7;
pub const LIUNIAN_QUERY_DAY: u8 = 1;

/// 每步大运年数
pub const DAYUN_SPAN: u16 = 10;

/// 大运输入
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DaYunInput {
	/// 出生年（公历）
	pub birth_year: u16,
	/// 起运岁数
	pub start_age: u16,
	pub direction: DaYunDirection,
	/// 提供方给出的大运柱（可少于配置步数）
	pub pillars: Vec<GanZhi>,
}

/// 流年
#[derive(
	Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
	RuntimeDebug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LiuNian {
	pub year: u16,
	pub age: u16,
	pub ganzhi: GanZhi,
}

/// 单步大运
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DaYun {
	/// 序号（从 0 开始）
	pub index: u8,
	pub start_age: u16,
	pub end_age: u16,
	pub start_year: u16,
	pub end_year: u16,
	pub ganzhi: GanZhi,
	pub liunian: Vec<LiuNian>,
}

/// 大运流年推算结果
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, RuntimeDebug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DaYunProjection {
	pub start_age: u16,
	pub direction: DaYunDirection,
	pub dayun: Vec<DaYun>,
}

fn step(gz: GanZhi, direction: DaYunDirection) -> GanZhi {
	match direction {
		DaYunDirection::Shun => gz.next(),
		DaYunDirection::Ni => gz.prev(),
	}
}

/// 补齐大运柱至 `steps` 步（至多 255 步）
pub fn complete_dayun_pillars(
	month: GanZhi,
	direction: DaYunDirection,
	supplied: &[GanZhi],
	steps: u32,
) -> Result<Vec<GanZhi>, BaziError> {
	let steps = usize::from(u8::try_from(steps).map_err(|_| BaziError::TooManyDaYunSteps)?);
	if supplied.len() > steps {
		return Err(BaziError::TooManyDaYunSteps);
	}
	for gz in supplied {
		check_ganzhi(*gz)?;
	}

	let mut pillars = Vec::with_capacity(steps);
	pillars.extend_from_slice(supplied);

	let mut last = supplied.last().copied().unwrap_or(month);
	while pillars.len() < steps {
		last = step(last, direction);
		pillars.push(last);
	}
	Ok(pillars)
}

/// 推算大运流年
pub fn project_dayun<C: SexagenaryCalendar>(
	input: &DaYunInput,
	month: GanZhi,
	steps: u32,
) -> Result<DaYunProjection, BaziError> {
	let pillars = complete_dayun_pillars(month, input.direction, &input.pillars, steps)?;
	let supported = C::supported_years();

	let dayun = (0..=u8::MAX)
		.zip(pillars)
		.map(|(index, ganzhi)| {
			let start_age =
				input.start_age.saturating_add(DAYUN_SPAN.saturating_mul(u16::from(index)));
			let end_age = start_age.saturating_add(DAYUN_SPAN - 1);
			let start_year = input.birth_year.saturating_add(start_age);
			let end_year = input.birth_year.saturating_add(end_age);

			let mut liunian = Vec::with_capacity(DAYUN_SPAN as usize);
			for year in start_year..=end_year {
				if !supported.contains(&year) {
					continue;
				}
				match C::year_ganzhi_exact(year, LIUNIAN_QUERY_MONTH, LIUNIAN_QUERY_DAY) {
					Ok(gz) => liunian.push(LiuNian {
						year,
						age: year - input.birth_year,
						ganzhi: gz,
					}),
					Err(e) => {
						log::warn!("⚠️ 计算流年失败 year={}: {:?}", year, e);
					},
				}
			}

			DaYun { index, start_age, end_age, start_year, end_year, ganzhi, liunian }
		})
		.collect();

	Ok(DaYunProjection { start_age: input.start_age, direction: input.direction, dayun })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		calendar::CycleYearCalendar,
		mock::MockCalendar,
		types::{DiZhi, TianGan},
	};

	fn gz(s: &str) -> GanZhi {
		GanZhi::parse(s).unwrap()
	}

	fn input(birth_year: u16, start_age: u16, pillars: Vec<GanZhi>) -> DaYunInput {
		DaYunInput { birth_year, start_age, direction: DaYunDirection::Shun, pillars }
	}

	#[test]
	fn completion_starts_from_month_pillar() {
		let p = complete_dayun_pillars(gz("戊寅"), DaYunDirection::Shun, &[], 10).unwrap();
		assert_eq!(p.len(), 10);
		assert_eq!(p[0], gz("己卯"));
		assert_eq!(p[1], gz("庚辰"));

		let p = complete_dayun_pillars(gz("戊寅"), DaYunDirection::Ni, &[], 3).unwrap();
		assert_eq!(p, vec![gz("丁丑"), gz("丙子"), gz("乙亥")]);
	}

	#[test]
	fn completion_continues_supplied_pillars() {
		let supplied = [gz("己卯"), gz("庚辰")];
		let p = complete_dayun_pillars(gz("戊寅"), DaYunDirection::Shun, &supplied, 4).unwrap();
		assert_eq!(p, vec![gz("己卯"), gz("庚辰"), gz("辛巳"), gz("壬午")]);
	}

	#[test]
	fn completion_rejects_excess_pillars() {
		let supplied = [gz("己卯"); 11];
		assert_eq!(
			complete_dayun_pillars(gz("戊寅"), DaYunDirection::Shun, &supplied, 10),
			Err(BaziError::TooManyDaYunSteps)
		);
	}

	#[test]
	fn completion_bounds_step_count() {
		assert_eq!(
			complete_dayun_pillars(gz("戊寅"), DaYunDirection::Shun, &[], 256),
			Err(BaziError::TooManyDaYunSteps)
		);
		let p = complete_dayun_pillars(gz("戊寅"), DaYunDirection::Shun, &[], 255).unwrap();
		assert_eq!(p.len(), 255);

		let proj = project_dayun::<CycleYearCalendar>(&input(1950, 1, Vec::new()), gz("戊寅"), 255)
			.unwrap();
		assert_eq!(proj.dayun.last().map(|d| d.index), Some(254));
	}

	#[test]
	fn completion_rejects_malformed_pillars() {
		// 甲丑阴阳不配
		let bad = GanZhi { gan: TianGan(0), zhi: DiZhi(1) };
		assert_eq!(
			complete_dayun_pillars(gz("戊寅"), DaYunDirection::Shun, &[bad], 10),
			Err(BaziError::InvalidGanZhi)
		);
	}

	#[test]
	fn decades_are_contiguous() {
		let proj = project_dayun::<CycleYearCalendar>(&input(1990, 3, Vec::new()), gz("戊寅"), 10)
			.unwrap();
		assert_eq!(proj.dayun.len(), 10);
		for i in 0..9 {
			assert_eq!(proj.dayun[i].end_age, proj.dayun[i + 1].start_age - 1);
			assert_eq!(proj.dayun[i].end_year + 1, proj.dayun[i + 1].start_year);
			assert_eq!(proj.dayun[i].index, i as u8);
		}
		let first = &proj.dayun[0];
		assert_eq!((first.start_age, first.end_age), (3, 12));
		assert_eq!((first.start_year, first.end_year), (1993, 2002));
		assert_eq!(first.ganzhi, gz("己卯"));
	}

	#[test]
	fn liunian_uses_calendar_and_actual_age() {
		let proj = project_dayun::<CycleYearCalendar>(&input(1990, 3, Vec::new()), gz("戊寅"), 10)
			.unwrap();
		let first = &proj.dayun[0];
		assert_eq!(first.liunian.len(), 10);
		assert_eq!(first.liunian[0], LiuNian { year: 1993, age: 3, ganzhi: gz("癸酉") });
		assert_eq!(first.liunian[9].year, 2002);
		assert_eq!(first.liunian[9].age, 12);
	}

	#[test]
	fn failed_year_is_skipped() {
		// MockCalendar 在 2000 年查询失败
		let proj =
			project_dayun::<MockCalendar>(&input(1990, 3, Vec::new()), gz("戊寅"), 10).unwrap();
		let first = &proj.dayun[0];
		assert_eq!(first.liunian.len(), 9);
		assert!(first.liunian.iter().all(|l| l.year != 2000));
		assert_eq!(proj.dayun[1].liunian.len(), 10);
	}

	#[test]
	fn years_beyond_supported_range_are_omitted() {
		let proj = project_dayun::<CycleYearCalendar>(&input(2080, 5, Vec::new()), gz("戊寅"), 10)
			.unwrap();
		// 2085-2094
		assert_eq!(proj.dayun[0].liunian.len(), 10);
		// 2095-2104 只剩 2095-2100
		assert_eq!(proj.dayun[1].liunian.len(), 6);
		assert_eq!(proj.dayun[1].liunian.last().map(|l| l.year), Some(2100));
		assert!(proj.dayun[2..].iter().all(|d| d.liunian.is_empty()));
		// 大运本身仍完整保留
		assert_eq!(proj.dayun.len(), 10);
	}

	#[test]
	fn supplied_pillars_are_used_verbatim() {
		let pillars = vec![gz("丁丑"), gz("丙子")];
		let mut inp = input(1990, 7, pillars);
		inp.direction = DaYunDirection::Ni;
		let proj = project_dayun::<CycleYearCalendar>(&inp, gz("戊寅"), 4).unwrap();
		let got: Vec<GanZhi> = proj.dayun.iter().map(|d| d.ganzhi).collect();
		assert_eq!(got, vec![gz("丁丑"), gz("丙子"), gz("乙亥"), gz("甲戌")]);
		assert_eq!(proj.direction, DaYunDirection::Ni);
		assert_eq!(proj.start_age, 7);
	}
}
