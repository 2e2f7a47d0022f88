//! # 八字计算
//!
//! 计算顺序：四柱组装 → 日主强弱 → 五行分布 → 十神汇总 → 格局判定；
//! 大运流年在给定起运参数后独立推算。全部为纯函数。

pub mod dayun;
pub mod geju;
pub mod rizhu;
pub mod shensha;
pub mod shishen;
pub mod sizhu;
pub mod wuxing;

pub use dayun::{complete_dayun_pillars, project_dayun, DaYun, DaYunInput, DaYunProjection, LiuNian};
pub use geju::{determine_geju, GeJu, GeJuCategory, GeJuContext, GeJuKind, GeJuRule, GEJU_RULES};
pub use rizhu::{analyze_rizhu, classify_strength, DeLing, RiZhuAnalysis};
pub use shensha::{ShenSha, ShenShaProvider, ShenShaSet, TaoHuaYiMa};
pub use shishen::{calculate_shishen, shishen_of, summarize_shishen, ShiShenSummary, SHISHEN_TABLE};
pub use sizhu::{build_sizhu, build_zhu, check_ganzhi, parse_ganzhi, SiZhu, SiZhuInput, Zhu, ZhuInput};
pub use wuxing::{analyze_wuxing, seasonal_states, wangshuai_of, WuXingProfile};
