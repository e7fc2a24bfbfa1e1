use super::super::catalog::Tag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TechCategory {
    Tools,
    Platforms,
    Skills,
    ContentTypes,
}

/// Tooling suggestions for the leading tag. Only the main categories are filled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTechnologies {
    pub focus: Option<Tag>,
    pub main_categories: Vec<TechCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_types: Vec<String>,
}

struct TechStack {
    tools: &'static [&'static str],
    platforms: &'static [&'static str],
    skills: &'static [&'static str],
    content_types: &'static [&'static str],
    main: [TechCategory; 2],
}

impl TechStack {
    fn category(&self, category: TechCategory) -> &'static [&'static str] {
        match category {
            TechCategory::Tools => self.tools,
            TechCategory::Platforms => self.platforms,
            TechCategory::Skills => self.skills,
            TechCategory::ContentTypes => self.content_types,
        }
    }
}

fn stack(tag: Tag) -> TechStack {
    use TechCategory::*;

    match tag {
        Tag::DataDriven => TechStack {
            tools: &["Google Analytics 4", "Google Looker Studio", "Tableau", "Amplitude"],
            platforms: &["Google Ads", "Meta Ads"],
            skills: &["데이터 분석", "A/B 테스트", "SQL"],
            content_types: &["케이스 스터디", "인포그래픽"],
            main: [Tools, Skills],
        },
        Tag::CustomerExperience => TechStack {
            tools: &["Hotjar", "Mixpanel", "채널톡"],
            platforms: &["카카오톡 채널", "네이버 스마트스토어"],
            skills: &["고객 여정 맵핑", "CRM 마케팅", "이메일 마케팅"],
            content_types: &["이메일 뉴스레터", "고객 후기 콘텐츠"],
            main: [Tools, Skills],
        },
        Tag::Innovation => TechStack {
            tools: &["Optimizely", "VWO", "ChatGPT"],
            platforms: &["TikTok Ads", "YouTube Shorts"],
            skills: &["A/B 테스트", "그로스 해킹", "프롬프트 엔지니어링"],
            content_types: &["숏폼 비디오", "인터랙티브 콘텐츠"],
            main: [Tools, Platforms],
        },
        Tag::TrendFocus => TechStack {
            tools: &["Google Trends", "네이버 데이터랩", "썸트렌드"],
            platforms: &["Instagram Ads", "TikTok Ads", "YouTube Ads"],
            skills: &["소셜 미디어 마케팅", "인플루언서 마케팅"],
            content_types: &["숏폼 비디오", "밈 콘텐츠"],
            main: [Platforms, ContentTypes],
        },
        Tag::ShortTermPerformance => TechStack {
            tools: &["Google Ads 스크립트", "AppsFlyer", "Meta 광고 관리자"],
            platforms: &["Google Ads", "Meta Ads", "네이버 검색광고", "Amazon Ads"],
            skills: &["퍼포먼스 마케팅", "SEO/SEM"],
            content_types: &["프로모션 배너", "랜딩 페이지"],
            main: [Platforms, Skills],
        },
        Tag::RiskAverse => TechStack {
            tools: &["Brandwatch", "Google Alerts", "Asana"],
            platforms: &["네이버 검색광고", "LinkedIn Ads"],
            skills: &["위기 커뮤니케이션", "프로젝트 관리"],
            content_types: &["화이트페이퍼", "FAQ 콘텐츠"],
            main: [Tools, Skills],
        },
        Tag::Emotional => TechStack {
            tools: &["Canva", "Adobe Premiere Pro"],
            platforms: &["Instagram", "YouTube"],
            skills: &["스토리텔링", "카피라이팅", "브랜드 전략"],
            content_types: &["브랜드 필름", "웹툰 콜라보"],
            main: [Skills, ContentTypes],
        },
        Tag::ContentMarketing => TechStack {
            tools: &["Notion", "Canva", "WordPress"],
            platforms: &["YouTube", "네이버 블로그", "브런치"],
            skills: &["콘텐츠 마케팅", "SEO/SEM", "카피라이팅"],
            content_types: &["블로그 포스트", "비디오 콘텐츠", "팟캐스트", "웨비나"],
            main: [Skills, ContentTypes],
        },
        Tag::CostEfficiency => TechStack {
            tools: &["Google Sheets", "Supermetrics", "Zapier"],
            platforms: &["Google Ads", "네이버 검색광고"],
            skills: &["마케팅 자동화", "예산 최적화"],
            content_types: &["이메일 뉴스레터", "케이스 스터디"],
            main: [Tools, Skills],
        },
        Tag::LongTermStrategy => TechStack {
            tools: &["Power BI", "Miro"],
            platforms: &["LinkedIn Ads", "YouTube Ads"],
            skills: &["브랜드 전략", "시장 조사", "비즈니스 모델 설계"],
            content_types: &["화이트페이퍼", "웨비나"],
            main: [Skills, ContentTypes],
        },
        Tag::BrandValue => TechStack {
            tools: &["Frontify", "Brandwatch"],
            platforms: &["Instagram", "YouTube", "Pinterest Ads"],
            skills: &["브랜드 전략", "브랜드 아이덴티티 디자인"],
            content_types: &["브랜드 필름", "매거진형 콘텐츠"],
            main: [Skills, ContentTypes],
        },
    }
}

pub fn recommend_technologies(top: Option<Tag>) -> RecommendedTechnologies {
    let Some(tag) = top else {
        return RecommendedTechnologies::default();
    };

    let stack = stack(tag);
    let mut recommended = RecommendedTechnologies {
        focus: Some(tag),
        main_categories: stack.main.to_vec(),
        ..RecommendedTechnologies::default()
    };

    for category in stack.main {
        let items = stack
            .category(category)
            .iter()
            .map(|item| item.to_string())
            .collect();
        match category {
            TechCategory::Tools => recommended.tools = items,
            TechCategory::Platforms => recommended.platforms = items,
            TechCategory::Skills => recommended.skills = items,
            TechCategory::ContentTypes => recommended.content_types = items,
        }
    }

    recommended
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_main_categories() {
        let recommended = recommend_technologies(Some(Tag::TrendFocus));

        assert_eq!(
            recommended.main_categories,
            vec![TechCategory::Platforms, TechCategory::ContentTypes]
        );
        assert!(recommended.tools.is_empty());
        assert!(recommended.skills.is_empty());
        assert_eq!(recommended.platforms[0], "Instagram Ads");
        assert_eq!(recommended.content_types, vec!["숏폼 비디오", "밈 콘텐츠"]);
    }

    #[test]
    fn every_tag_fills_exactly_two_categories() {
        for tag in Tag::ALL {
            let recommended = recommend_technologies(Some(tag));
            let filled = [
                &recommended.tools,
                &recommended.platforms,
                &recommended.skills,
                &recommended.content_types,
            ]
            .iter()
            .filter(|items| !items.is_empty())
            .count();
            assert_eq!(filled, 2, "{tag}");
        }
    }

    #[test]
    fn empty_categories_are_not_serialized() {
        let json = serde_json::to_value(recommend_technologies(Some(Tag::DataDriven)))
            .expect("serialize");

        assert!(json.get("platforms").is_none());
        assert_eq!(json["mainCategories"], serde_json::json!(["tools", "skills"]));
        assert_eq!(json["focus"], "데이터 기반");
    }
}
