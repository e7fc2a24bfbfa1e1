use super::super::catalog::Tag;
use serde::{Deserialize, Serialize};

pub(crate) const FUNDAMENTALS: &str =
    "기초 역량을 다지기 위해 온라인 강의나 실습 프로젝트를 시작해보세요.";
pub(crate) const LEADERSHIP: &str =
    "전반적으로 높은 수준의 마케팅 역량을 보유하고 있습니다. 리더십 역할에 도전해보세요.";
pub(crate) const BROAD_BASICS: &str = "다양한 마케팅 영역에서 기초 역량을 키우는 것에 집중해보세요.";

pub(crate) const GENERIC_ROLES: [&str; 3] = ["마케팅 매니저", "디지털 마케터", "브랜드 매니저"];

/// Advice for growing an already strong tag further.
pub(crate) fn deepen_expertise(tag: Tag) -> &'static str {
    match tag {
        Tag::DataDriven => "당신의 강점인 데이터 분석을 더욱 극대화하기 위해 관련 전문 자격증이나 고급 과정을 수강해보세요.",
        Tag::CustomerExperience => "고객 경험 중시 역량을 강화하기 위해 UX/UI 디자인 과정이나 고객 여정 맵핑 워크샵에 참여해보세요.",
        Tag::Innovation => "혁신적 실험 능력을 키우기 위해 A/B 테스트 전문 과정이나 실험 설계 방법론을 학습해보세요.",
        Tag::TrendFocus => "트렌드 예측 능력을 향상시키기 위해 시장 분석 도구나 트렌드 리서치 방법론을 익혀보세요.",
        Tag::ShortTermPerformance => "성과 최적화 역량을 강화하기 위해 디지털 마케팅 분석 도구나 성과 측정 방법론을 학습해보세요.",
        Tag::RiskAverse => "리스크 관리 능력을 향상시키기 위해 프로젝트 관리 자격증이나 위험 평가 방법론을 익혀보세요.",
        Tag::Emotional => "감성적 커뮤니케이션 능력을 키우기 위해 스토리텔링 워크샵이나 브랜드 스토리 작성법을 학습해보세요.",
        Tag::ContentMarketing => "콘텐츠 마케팅 역량을 강화하기 위해 콘텐츠 전략 수립법이나 크리에이티브 디자인 과정을 수강해보세요.",
        Tag::CostEfficiency => "효율성 최적화 능력을 향상시키기 위해 프로세스 개선 방법론이나 자동화 도구 활용법을 학습해보세요.",
        Tag::LongTermStrategy => "장기 전략 수립 능력을 키우기 위해 전략적 사고 워크샵이나 비즈니스 모델 설계 과정을 수강해보세요.",
        Tag::BrandValue => "브랜드 가치 창조 능력을 강화하기 위해 브랜드 전략 수립법이나 브랜드 아이덴티티 디자인 과정을 학습해보세요.",
    }
}

/// Tag pairs that unlock role suggestions when both sit in the top three.
pub(crate) const ROLE_COMBINATIONS: &[(Tag, Tag, &[&str])] = &[
    (
        Tag::DataDriven,
        Tag::ShortTermPerformance,
        &["퍼포먼스 마케터", "그로스 마케터", "마케팅 애널리스트"],
    ),
    (
        Tag::DataDriven,
        Tag::CustomerExperience,
        &["CRM 마케터", "고객 인사이트 매니저", "마케팅 애널리스트"],
    ),
    (
        Tag::CustomerExperience,
        Tag::Emotional,
        &["브랜드 경험 매니저", "CX 디자이너"],
    ),
    (
        Tag::Innovation,
        Tag::TrendFocus,
        &["그로스 해커", "뉴미디어 마케터", "소셜 미디어 매니저"],
    ),
    (
        Tag::ContentMarketing,
        Tag::Emotional,
        &["콘텐츠 마케터", "브랜드 스토리텔러", "카피라이터"],
    ),
    (
        Tag::BrandValue,
        Tag::LongTermStrategy,
        &["브랜드 매니저", "마케팅 전략 기획자"],
    ),
    (
        Tag::CostEfficiency,
        Tag::ShortTermPerformance,
        &["퍼포먼스 마케터", "미디어 플래너"],
    ),
    (
        Tag::RiskAverse,
        Tag::BrandValue,
        &["브랜드 커뮤니케이션 매니저", "PR 매니저"],
    ),
    (
        Tag::TrendFocus,
        Tag::ContentMarketing,
        &["콘텐츠 크리에이터", "소셜 미디어 매니저"],
    ),
];

pub(crate) fn skill_gaps(tag: Tag) -> [&'static str; 2] {
    match tag {
        Tag::DataDriven => ["GA4 리포트 해석", "엑셀/SQL 기초 분석"],
        Tag::CustomerExperience => ["고객 인터뷰 설계", "VOC 분석"],
        Tag::Innovation => ["실험 설계 기초", "신규 채널 테스트"],
        Tag::TrendFocus => ["트렌드 리서치 방법론", "소셜 리스닝"],
        Tag::ShortTermPerformance => ["KPI 설정", "성과 리포팅"],
        Tag::RiskAverse => ["리스크 평가", "위기 대응 매뉴얼 작성"],
        Tag::Emotional => ["스토리텔링 기초", "감성 카피라이팅"],
        Tag::ContentMarketing => ["콘텐츠 기획", "채널별 포맷 이해"],
        Tag::CostEfficiency => ["예산 관리", "효율 지표 분석"],
        Tag::LongTermStrategy => ["전략적 사고", "로드맵 수립"],
        Tag::BrandValue => ["브랜드 아이덴티티 이해", "톤앤매너 가이드 작성"],
    }
}

/// How a marketer led by a given tag tends to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingStyle {
    pub approach: String,
    pub decision_making: String,
    pub communication: String,
    pub risk_tolerance: String,
    pub time_orientation: String,
}

impl MarketingStyle {
    fn from_parts(parts: [&str; 5]) -> Self {
        let [approach, decision_making, communication, risk_tolerance, time_orientation] = parts;
        Self {
            approach: approach.to_string(),
            decision_making: decision_making.to_string(),
            communication: communication.to_string(),
            risk_tolerance: risk_tolerance.to_string(),
            time_orientation: time_orientation.to_string(),
        }
    }

    /// Style for a leading tag, or the integrated default when there is none.
    pub fn for_tag(tag: Option<Tag>) -> Self {
        let parts = match tag {
            Some(Tag::DataDriven) => [
                "지표 중심 접근법",
                "데이터 기반 의사결정",
                "근거와 수치로 설득하는 소통",
                "검증된 범위 내 계산된 위험 감수",
                "분기 단위 성과 추적",
            ],
            Some(Tag::CustomerExperience) => [
                "고객 여정 중심 접근법",
                "고객 피드백 기반 의사결정",
                "공감형 소통",
                "고객 신뢰를 해치지 않는 선의 위험 감수",
                "장기적 관계 구축",
            ],
            Some(Tag::Innovation) => [
                "실험 주도 접근법",
                "가설 검증 기반 의사결정",
                "비전 제시형 소통",
                "높은 위험 감수",
                "미래 기회 선점",
            ],
            Some(Tag::TrendFocus) => [
                "트렌드 선점 접근법",
                "시장 반응 기반 의사결정",
                "트렌디한 언어의 소통",
                "빠른 시도와 철수",
                "단기 화제성 중심",
            ],
            Some(Tag::ShortTermPerformance) => [
                "성과 극대화 접근법",
                "KPI 기반 의사결정",
                "결과 중심의 간결한 소통",
                "성과를 위한 적극적 위험 감수",
                "월간·분기 목표 중심",
            ],
            Some(Tag::RiskAverse) => [
                "안정 운영 접근법",
                "검증된 사례 기반 의사결정",
                "신중하고 정확한 소통",
                "낮은 위험 선호",
                "지속 가능한 성장",
            ],
            Some(Tag::Emotional) => [
                "스토리 중심 접근법",
                "직관과 공감 기반 의사결정",
                "감성적 스토리텔링 소통",
                "브랜드 감성을 지키는 선의 위험 감수",
                "브랜드 기억 축적",
            ],
            Some(Tag::ContentMarketing) => [
                "콘텐츠 허브 접근법",
                "콘텐츠 반응 기반 의사결정",
                "크리에이티브 중심 소통",
                "포맷 실험 수준의 위험 감수",
                "꾸준한 자산 축적",
            ],
            Some(Tag::CostEfficiency) => [
                "효율 최적화 접근법",
                "비용 대비 효과 기반 의사결정",
                "숫자로 정리된 간결한 소통",
                "예산 손실을 피하는 보수적 태도",
                "지속적 효율 개선",
            ],
            Some(Tag::LongTermStrategy) => [
                "전략 설계 접근법",
                "장기 목표 기반 의사결정",
                "큰 그림을 공유하는 소통",
                "장기 가치를 위한 계산된 위험 감수",
                "연 단위 이상의 장기 관점",
            ],
            Some(Tag::BrandValue) => [
                "브랜드 일관성 접근법",
                "브랜드 가치 기반 의사결정",
                "톤앤매너를 지키는 소통",
                "브랜드 훼손 위험 최소화",
                "브랜드 자산 장기 축적",
            ],
            None => [
                "통합적 접근법",
                "상황별 판단",
                "상황별 맞춤형 소통",
                "계산된 위험 관리",
                "단기와 장기의 균형",
            ],
        };

        Self::from_parts(parts)
    }
}
