use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of marketing traits attached to quiz choices.
///
/// Declaration order is the catalog order and is used to break count ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "데이터 기반")]
    DataDriven,
    #[serde(rename = "고객 경험 중시")]
    CustomerExperience,
    #[serde(rename = "혁신/실험 선호")]
    Innovation,
    #[serde(rename = "트렌드 중시")]
    TrendFocus,
    #[serde(rename = "단기 성과 집착")]
    ShortTermPerformance,
    #[serde(rename = "리스크 회피")]
    RiskAverse,
    #[serde(rename = "감성")]
    Emotional,
    #[serde(rename = "콘텐츠 마케팅")]
    ContentMarketing,
    #[serde(rename = "비용 효율 중시")]
    CostEfficiency,
    #[serde(rename = "장기 전략")]
    LongTermStrategy,
    #[serde(rename = "브랜드 가치 중시")]
    BrandValue,
}

impl Tag {
    pub const COUNT: usize = 11;

    pub const ALL: [Tag; Tag::COUNT] = [
        Tag::DataDriven,
        Tag::CustomerExperience,
        Tag::Innovation,
        Tag::TrendFocus,
        Tag::ShortTermPerformance,
        Tag::RiskAverse,
        Tag::Emotional,
        Tag::ContentMarketing,
        Tag::CostEfficiency,
        Tag::LongTermStrategy,
        Tag::BrandValue,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Label used on quiz choices and in persisted answers.
    pub const fn label(self) -> &'static str {
        match self {
            Tag::DataDriven => "데이터 기반",
            Tag::CustomerExperience => "고객 경험 중시",
            Tag::Innovation => "혁신/실험 선호",
            Tag::TrendFocus => "트렌드 중시",
            Tag::ShortTermPerformance => "단기 성과 집착",
            Tag::RiskAverse => "리스크 회피",
            Tag::Emotional => "감성",
            Tag::ContentMarketing => "콘텐츠 마케팅",
            Tag::CostEfficiency => "비용 효율 중시",
            Tag::LongTermStrategy => "장기 전략",
            Tag::BrandValue => "브랜드 가치 중시",
        }
    }

    /// Resolves a raw answer tag. Strings outside the catalog yield `None`.
    pub fn from_label(raw: &str) -> Option<Tag> {
        let raw = raw.trim();
        Tag::ALL.into_iter().find(|tag| tag.label() == raw)
    }

    pub fn profile(self) -> &'static TagProfile {
        &PROFILES[self.index()]
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Proficiency levels, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Expert,
    Advanced,
    Intermediate,
    Basic,
    Minimal,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Expert,
        Level::Advanced,
        Level::Intermediate,
        Level::Basic,
        Level::Minimal,
    ];

    pub const fn from_score(score: u8) -> Level {
        match score {
            80.. => Level::Expert,
            65..=79 => Level::Advanced,
            45..=64 => Level::Intermediate,
            25..=44 => Level::Basic,
            _ => Level::Minimal,
        }
    }

    /// The level directly above this one, `None` at the top.
    pub const fn next(self) -> Option<Level> {
        match self {
            Level::Expert => None,
            Level::Advanced => Some(Level::Expert),
            Level::Intermediate => Some(Level::Advanced),
            Level::Basic => Some(Level::Intermediate),
            Level::Minimal => Some(Level::Basic),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Level::Expert => "EXPERT",
            Level::Advanced => "ADVANCED",
            Level::Intermediate => "INTERMEDIATE",
            Level::Basic => "BASIC",
            Level::Minimal => "MINIMAL",
        }
    }
}

#[derive(Debug)]
pub struct LevelDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static catalog entry for a tag.
#[derive(Debug)]
pub struct TagProfile {
    pub name: &'static str,
    pub description: &'static str,
    levels: [LevelDescriptor; 5],
}

impl TagProfile {
    pub fn level(&self, level: Level) -> &LevelDescriptor {
        &self.levels[level.index()]
    }
}

const fn level(name: &'static str, description: &'static str) -> LevelDescriptor {
    LevelDescriptor { name, description }
}

static PROFILES: [TagProfile; Tag::COUNT] = [
    TagProfile {
        name: "데이터 기반",
        description: "데이터와 지표를 근거로 판단하고 성과를 측정하는 성향",
        levels: [
            level(
                "데이터 기반 의사결정 전문가",
                "정확한 데이터 분석을 통해 마케팅 전략을 수립하고 성과를 극대화합니다.",
            ),
            level(
                "데이터 분석 숙련가",
                "주요 지표를 설계하고 분석 결과를 실행 계획으로 연결합니다.",
            ),
            level(
                "데이터 활용 실무자",
                "기본 리포트를 읽고 캠페인 개선에 데이터를 참고합니다.",
            ),
            level("데이터 입문자", "핵심 지표의 의미를 이해하기 시작한 단계입니다."),
            level("직관 중심형", "데이터보다 경험과 직관에 의존해 판단하는 편입니다."),
        ],
    },
    TagProfile {
        name: "고객 경험 중시",
        description: "고객 여정 전반의 경험과 만족을 우선하는 성향",
        levels: [
            level(
                "고객 중심 마케팅 전략가",
                "고객의 니즈와 경험을 최우선으로 고려한 마케팅 솔루션을 제공합니다.",
            ),
            level(
                "고객 여정 설계자",
                "고객 접점을 분석하고 여정 전반의 경험을 개선합니다.",
            ),
            level(
                "고객 경험 실무자",
                "고객 피드백을 수집하고 개선 과제로 정리합니다.",
            ),
            level(
                "고객 관점 입문자",
                "고객의 목소리에 관심을 갖기 시작한 단계입니다.",
            ),
            level(
                "제품 중심형",
                "고객 경험보다 제품과 기능 자체에 집중하는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "혁신/실험 선호",
        description: "새로운 채널과 방식을 과감하게 시도하는 성향",
        levels: [
            level(
                "혁신적 실험 설계자",
                "창의적이고 혁신적인 접근법으로 새로운 마케팅 기회를 창출합니다.",
            ),
            level("그로스 실험가", "가설을 세우고 A/B 테스트로 빠르게 검증합니다."),
            level("실험 실무자", "새로운 채널과 포맷을 부분적으로 시도해 봅니다."),
            level(
                "변화 관찰자",
                "새로운 시도에 관심은 있지만 검증된 방식을 선호합니다.",
            ),
            level(
                "관행 유지형",
                "기존에 효과가 확인된 방식을 그대로 유지하는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "트렌드 중시",
        description: "시장의 최신 흐름을 빠르게 읽고 반영하는 성향",
        levels: [
            level(
                "트렌드 예측 및 활용 전문가",
                "시장 트렌드를 정확히 파악하고 이를 마케팅에 효과적으로 활용합니다.",
            ),
            level(
                "트렌드 큐레이터",
                "떠오르는 플랫폼과 밈을 캠페인에 빠르게 접목합니다.",
            ),
            level("트렌드 팔로워", "주요 트렌드를 파악하고 콘텐츠에 반영합니다."),
            level(
                "트렌드 입문자",
                "화제가 된 이슈를 뒤늦게 접하는 경우가 많습니다.",
            ),
            level(
                "클래식 지향형",
                "유행보다 변하지 않는 메시지에 집중하는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "단기 성과 집착",
        description: "명확한 목표와 빠른 성과 달성을 중시하는 성향",
        levels: [
            level(
                "성과 최적화 마스터",
                "단기적 성과 달성과 ROI 최적화에 특화된 마케팅 전략을 실행합니다.",
            ),
            level(
                "퍼포먼스 마케터",
                "KPI를 기준으로 예산과 소재를 빠르게 조정합니다.",
            ),
            level(
                "성과 관리 실무자",
                "월간 목표를 관리하며 주요 지표를 추적합니다.",
            ),
            level("성과 입문자", "성과 지표를 설정하는 방법을 익히는 단계입니다."),
            level(
                "과정 중시형",
                "당장의 수치보다 과정과 방향성을 중요하게 여깁니다.",
            ),
        ],
    },
    TagProfile {
        name: "리스크 회피",
        description: "검증된 방식으로 실패 가능성을 줄이는 성향",
        levels: [
            level(
                "리스크 관리 전문가",
                "체계적이고 안정적인 마케팅 접근법으로 지속 가능한 성과를 만듭니다.",
            ),
            level(
                "위기 대응 설계자",
                "잠재 리스크를 미리 점검하고 대응 시나리오를 준비합니다.",
            ),
            level(
                "안정 운영 실무자",
                "검증된 채널 중심으로 예산을 안정적으로 운영합니다.",
            ),
            level(
                "리스크 인지 단계",
                "주요 위험 요소를 인식하기 시작한 단계입니다.",
            ),
            level(
                "과감한 도전형",
                "위험을 감수하더라도 큰 기회를 노리는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "감성",
        description: "감정적 공감과 스토리로 브랜드를 전달하는 성향",
        levels: [
            level(
                "감성적 브랜드 커뮤니케이터",
                "감정적 연결을 통해 브랜드와 고객 간의 강력한 유대감을 구축합니다.",
            ),
            level(
                "브랜드 스토리텔러",
                "공감을 부르는 메시지로 캠페인의 톤을 설계합니다.",
            ),
            level(
                "감성 콘텐츠 실무자",
                "감정에 호소하는 카피와 비주얼을 활용합니다.",
            ),
            level("감성 입문자", "감성적 메시지의 효과를 익히는 단계입니다."),
            level(
                "이성 소구형",
                "감정보다 기능과 혜택을 논리적으로 전달하는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "콘텐츠 마케팅",
        description: "콘텐츠를 중심으로 고객과의 접점을 만드는 성향",
        levels: [
            level(
                "콘텐츠 전략 및 제작 전문가",
                "매력적이고 효과적인 콘텐츠를 통해 브랜드 메시지를 전달합니다.",
            ),
            level(
                "콘텐츠 기획자",
                "채널별 콘텐츠 캘린더를 설계하고 운영합니다.",
            ),
            level(
                "콘텐츠 제작 실무자",
                "정해진 기획에 맞춰 콘텐츠를 꾸준히 제작합니다.",
            ),
            level(
                "콘텐츠 입문자",
                "콘텐츠 포맷과 채널 특성을 익히는 단계입니다.",
            ),
            level(
                "광고 집행형",
                "콘텐츠보다 유료 광고 집행에 의존하는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "비용 효율 중시",
        description: "투입 대비 효과를 따져 예산을 운용하는 성향",
        levels: [
            level(
                "효율성 극대화 전문가",
                "비용 효율성을 고려한 최적화된 마케팅 전략을 수립합니다.",
            ),
            level(
                "예산 최적화 설계자",
                "채널별 효율을 비교해 예산을 재배분합니다.",
            ),
            level("효율 관리 실무자", "CPA, ROAS 등 비용 지표를 관리합니다."),
            level(
                "효율 입문자",
                "비용 대비 효과를 따져보기 시작한 단계입니다.",
            ),
            level(
                "투자 확대형",
                "효율보다 규모 있는 투자로 성장을 노리는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "장기 전략",
        description: "장기적인 관점에서 성장 방향을 설계하는 성향",
        levels: [
            level(
                "장기 전략 수립 전문가",
                "장기적 관점에서 브랜드 성장과 시장 지배력을 추구합니다.",
            ),
            level(
                "전략 플래너",
                "연간 로드맵을 세우고 단계별 목표를 설계합니다.",
            ),
            level(
                "전략 실행 실무자",
                "중장기 계획에 맞춰 캠페인을 운영합니다.",
            ),
            level(
                "전략 입문자",
                "장기 목표와 단기 과제를 연결하는 법을 익히는 단계입니다.",
            ),
            level(
                "즉시 대응형",
                "계획보다 당면한 과제에 바로 대응하는 편입니다.",
            ),
        ],
    },
    TagProfile {
        name: "브랜드 가치 중시",
        description: "브랜드의 핵심 가치와 일관성을 지키는 성향",
        levels: [
            level(
                "브랜드 가치 창조 전문가",
                "브랜드의 핵심 가치를 보호하고 강화하는 마케팅 전략을 실행합니다.",
            ),
            level(
                "브랜드 매니저",
                "브랜드 가이드를 운영하며 일관된 경험을 만듭니다.",
            ),
            level(
                "브랜드 실무자",
                "브랜드 톤앤매너를 지키며 콘텐츠를 만듭니다.",
            ),
            level(
                "브랜드 입문자",
                "브랜드 아이덴티티의 중요성을 익히는 단계입니다.",
            ),
            level(
                "판매 우선형",
                "브랜드 이미지보다 당장의 판매를 우선하는 편입니다.",
            ),
        ],
    },
];
