use super::super::catalog::Tag;

/// Persona label with its two "personal colors".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnaEntry {
    pub label: &'static str,
    pub colors: [&'static str; 2],
}

const fn entry(label: &'static str, first: &'static str, second: &'static str) -> DnaEntry {
    DnaEntry {
        label,
        colors: [first, second],
    }
}

pub const ALL_ROUND: DnaEntry = entry(
    "올라운드 마케팅 스트래티지스트",
    "균형이 흐르는 오로라 그라데이션",
    "조화가 빛나는 프리즘 화이트",
);

pub fn single_entry(tag: Tag) -> DnaEntry {
    match tag {
        Tag::DataDriven => entry(
            "데이터 사이언티스트 마케터",
            "생각이 머무는 안개의 짙은 그레이",
            "신중하게 타오르는 청록의 불꽃",
        ),
        Tag::CustomerExperience => entry(
            "고객 경험 아키텍트",
            "따뜻한 마음이 피어나는 코랄 핑크",
            "공감의 물결이 흐르는 연둣빛 바다",
        ),
        Tag::Innovation => entry(
            "디지털 이노베이터",
            "새벽을 깨우는 전기빛 바이올렛",
            "경계를 부수는 네온 오렌지",
        ),
        Tag::TrendFocus => entry(
            "트렌드 캐처",
            "순간을 포착하는 홀로그램 실버",
            "트렌드가 춤추는 무지개빛 프리즘",
        ),
        Tag::ShortTermPerformance => entry(
            "퍼포먼스 드라이버",
            "목표를 향한 화살의 골드",
            "승리를 새기는 다이아몬드 화이트",
        ),
        Tag::RiskAverse => entry(
            "안정성 마스터",
            "신뢰가 쌓이는 깊은 네이비",
            "안정감이 흐르는 모스 그린",
        ),
        Tag::Emotional => entry(
            "감성 스토리텔러",
            "이야기가 시작되는 미드나잇 블루",
            "감동이 피어나는 벚꽃 로즈",
        ),
        Tag::ContentMarketing => entry(
            "콘텐츠 크리에이터",
            "스토리가 흐르는 인디고 블루",
            "창작의 영감이 피어나는 에메랄드 그린",
        ),
        Tag::CostEfficiency => entry(
            "효율성 최적화 전문가",
            "절약의 지혜가 빛나는 실버 그레이",
            "효율이 흐르는 클리어 크리스탈",
        ),
        Tag::LongTermStrategy => entry(
            "전략적 비전 리더",
            "미래를 그리는 딥 퍼플",
            "전략이 빛나는 골드 앰버",
        ),
        Tag::BrandValue => entry(
            "브랜드 가디언",
            "브랜드의 영혼이 깃든 로얄 블루",
            "가치가 빛나는 다이아몬드 화이트",
        ),
    }
}

/// Exact ordered-pair lookup; callers try the reversed pair themselves.
pub fn pair_entry(primary: Tag, secondary: Tag) -> Option<DnaEntry> {
    use Tag::*;

    let found = match (primary, secondary) {
        (DataDriven, CustomerExperience) => entry(
            "데이터 기반 고객 경험 설계자",
            "마음을 읽는 크리스탈 블루",
            "통찰이 빛나는 갤럭시 퍼플",
        ),
        (DataDriven, Innovation) => entry(
            "데이터 사이언스 이노베이터",
            "미래를 예측하는 퀀텀 실버",
            "혁신이 증명되는 사파이어 블루",
        ),
        (DataDriven, ShortTermPerformance) => entry(
            "ROI 최적화 스페셜리스트",
            "승부를 가르는 스틸 실버",
            "데이터가 말하는 사파이어 블루",
        ),
        (CustomerExperience, Innovation) => entry(
            "고객 중심 이노베이션 리더",
            "고객의 꿈이 피어나는 아쿠아 그린",
            "혁신이 깃드는 오팔 퍼플",
        ),
        (CustomerExperience, Emotional) => entry(
            "감성 고객 경험 디자이너",
            "마음이 닿는 따뜻한 앰버",
            "공감이 흐르는 라벤더 퍼플",
        ),
        (TrendFocus, Innovation) => entry(
            "트렌드 이노베이션 크리에이터",
            "트렌드를 앞서는 네온 핑크",
            "혁신이 흐르는 홀로그램 골드",
        ),
        (TrendFocus, ContentMarketing) => entry(
            "바이럴 콘텐츠 크리에이터",
            "바이럴이 시작되는 일렉트릭 옐로우",
            "콘텐츠가 흐르는 머메이드 그린",
        ),
        (ShortTermPerformance, CostEfficiency) => entry(
            "효율성 극대화 마케터",
            "효율이 흐르는 클리어 크리스탈",
            "성과가 빛나는 플래티넘 실버",
        ),
        (DataDriven, TrendFocus) => entry(
            "데이터 기반 트렌드 애널리스트",
            "트렌드를 분석하는 퀀텀 실버",
            "데이터가 말하는 홀로그램 골드",
        ),
        (CustomerExperience, ShortTermPerformance) => entry(
            "고객 중심 성과 마스터",
            "고객의 마음을 읽는 코랄 핑크",
            "성과가 빛나는 골드",
        ),
        (Emotional, Innovation) => entry(
            "감성 이노베이션 크리에이터",
            "감성이 깃든 바이올렛",
            "혁신이 피어나는 로즈 골드",
        ),
        (Emotional, TrendFocus) => entry(
            "감성 트렌드 스토리텔러",
            "트렌드가 감동을 주는 무지개빛",
            "감성이 흐르는 라벤더",
        ),
        (Emotional, ContentMarketing) => entry(
            "감성 콘텐츠 아티스트",
            "감성이 담긴 인디고",
            "스토리가 피어나는 로즈",
        ),
        (DataDriven, BrandValue) => entry(
            "데이터 기반 브랜드 스트래티지스트",
            "브랜드의 데이터가 빛나는 로얄 블루",
            "분석이 깃든 다이아몬드",
        ),
        (BrandValue, CustomerExperience) => entry(
            "브랜드 고객 경험 디자이너",
            "브랜드의 마음이 닿는 로얄 블루",
            "고객의 꿈이 피어나는 코랄",
        ),
        (LongTermStrategy, Innovation) => entry(
            "전략적 이노베이션 비전리더",
            "미래를 그리는 딥 퍼플",
            "혁신이 빛나는 바이올렛",
        ),
        (LongTermStrategy, TrendFocus) => entry(
            "전략적 트렌드 비전리더",
            "미래 트렌드를 그리는 딥 퍼플",
            "트렌드가 빛나는 홀로그램",
        ),
        (RiskAverse, CostEfficiency) => entry(
            "안정적 효율 관리자",
            "절제가 빛나는 스모키 그레이",
            "균형을 지키는 세이지 그린",
        ),
        (RiskAverse, LongTermStrategy) => entry(
            "신중한 장기 전략가",
            "시간이 쌓이는 딥 네이비",
            "신중함이 깃든 올리브 그린",
        ),
        (BrandValue, LongTermStrategy) => entry(
            "브랜드 헤리티지 빌더",
            "유산이 빛나는 버건디",
            "전통이 흐르는 앤티크 골드",
        ),
        (ContentMarketing, BrandValue) => entry(
            "브랜드 스토리 크리에이터",
            "이야기가 깃든 로얄 퍼플",
            "브랜드가 흐르는 샴페인 골드",
        ),
        (ContentMarketing, CustomerExperience) => entry(
            "고객 공감 콘텐츠 디자이너",
            "공감이 피어나는 피치 코랄",
            "콘텐츠가 닿는 스카이 블루",
        ),
        (DataDriven, CostEfficiency) => entry(
            "데이터 기반 효율 전략가",
            "숫자가 빛나는 티타늄 실버",
            "효율이 증명되는 아이스 블루",
        ),
        (ShortTermPerformance, TrendFocus) => entry(
            "트렌드 퍼포먼스 헌터",
            "순간을 붙잡는 네온 그린",
            "성과가 튀어오르는 선셋 오렌지",
        ),
        (RiskAverse, BrandValue) => entry(
            "브랜드 신뢰 수호자",
            "신뢰가 머무는 미드나잇 네이비",
            "품격이 흐르는 펄 화이트",
        ),
        _ => return None,
    };

    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_table_has_twenty_five_directed_entries() {
        let mut hits = 0;
        for a in Tag::ALL {
            for b in Tag::ALL {
                if pair_entry(a, b).is_some() {
                    hits += 1;
                }
            }
        }
        assert_eq!(hits, 25);
    }

    #[test]
    fn pair_lookup_is_directional() {
        assert!(pair_entry(Tag::DataDriven, Tag::CustomerExperience).is_some());
        assert!(pair_entry(Tag::CustomerExperience, Tag::DataDriven).is_none());
    }

    #[test]
    fn every_entry_has_two_colors() {
        for tag in Tag::ALL {
            let single = single_entry(tag);
            assert!(!single.label.is_empty());
            assert!(single.colors.iter().all(|color| !color.is_empty()));
        }
    }
}
