//! Static keyword tables
//!
//! Each table is ordered. Tradition matching is non-exclusive; period and
//! origin matching return the first entry with any keyword present, so moving
//! an entry changes results.

use crate::domain::value_objects::{Origin, Period, Tradition};

/// Ordered `(label, keywords)` pairs
pub type KeywordTable<L> = &'static [(L, &'static [&'static str])];

pub const TRADITION_TABLE: KeywordTable<Tradition> = &[
    (
        Tradition::ChanZen,
        &["禪", "禅", "chan", "zen", "曹洞", "臨濟", "雲門", "潙仰", "法眼"],
    ),
    (
        Tradition::PureLand,
        &["淨土", "净土", "净土宗", "淨土宗", "蓮社", "念佛法門", "阿彌陀"],
    ),
    (Tradition::Tiantai, &["天台", "法華", "止觀", "智者", "天台宗"]),
    (Tradition::Huayan, &["華嚴", "华严", "賢首", "法藏", "澄觀"]),
    (
        Tradition::Vinaya,
        &["律", "毗奈耶", "戒律", "四分律", "五分律", "摩訶僧祇律"],
    ),
    (Tradition::Madhyamaka, &["中觀", "中論", "龍樹", "提婆", "三論"]),
    (
        Tradition::Yogacara,
        &["瑜伽", "唯識", "瑜伽行派", "無著", "世親", "成唯識"],
    ),
    (
        Tradition::Esoteric,
        &["密", "密教", "陀羅尼", "真言", "壇城", "曼荼羅"],
    ),
    (Tradition::PurePrecepts, &["菩薩戒", "梵網經", "心地戒"]),
    (
        Tradition::PaliTheravada,
        &["南傳", "巴利", "Theravāda", "尼柯耶", "律藏"],
    ),
    (Tradition::Tibetan, &["藏傳", "西藏", "Tibetan", "甘珠爾", "丹珠爾"]),
    (
        Tradition::Commentarial,
        &["註", "疏", "記", "釋", "解", "論", "鈔"],
    ),
    (Tradition::Historical, &["史", "傳", "誌", "錄", "譜"]),
    (Tradition::Liturgical, &["儀軌", "法事", "懺", "儀", "課誦"]),
];

pub const PERIOD_TABLE: KeywordTable<Period> = &[
    (
        Period::PreTang,
        &[
            "漢", "魏", "晉", "南北朝", "劉宋", "南齊", "梁", "陳", "北魏", "北齊", "北周", "隋",
        ],
    ),
    (Period::Tang, &["唐"]),
    (Period::Song, &["宋", "北宋", "南宋"]),
    (Period::Yuan, &["元"]),
    (Period::Ming, &["明"]),
    (Period::Qing, &["清"]),
    (Period::Modern, &["民國", "中華民國", "現代"]),
    (Period::Contemporary, &["當代"]),
];

pub const ORIGIN_TABLE: KeywordTable<Origin> = &[
    (
        Origin::India,
        &["印度", "天竺", "中天竺", "北天竺", "南天竺", "西天"],
    ),
    (Origin::CentralAsia, &["西域", "中亞", "龜茲", "于闐", "高昌"]),
    (
        Origin::China,
        &["中國", "漢地", "中土", "大唐", "大宋", "大元", "大明", "大清"],
    ),
    (Origin::Korea, &["高麗", "新羅", "百濟", "朝鮮"]),
    (Origin::Japan, &["日本", "倭"]),
    (Origin::SoutheastAsia, &["南海", "扶南", "真臘", "林邑"]),
];

/// Era words checked after the period table: modern first
pub const MODERN_ERA_KEYWORDS: &[&str] = &["民國", "中華民國", "現代"];

pub const CONTEMPORARY_ERA_KEYWORDS: &[&str] = &["當代", "現代"];

/// Monastic surname carried by ordained authors (釋 = Śākya)
pub const ORDINATION_MARKER: &str = "釋";

/// Dynasty names that, with an ordained author, imply traditional Chinese Buddhism
pub const DYNASTY_MARKERS: &[&str] = &["唐", "宋", "元", "明", "清"];
