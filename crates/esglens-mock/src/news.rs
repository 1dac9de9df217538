//! Mock positive-news, paginated the way the server paginates: filter
//! first, then slice by zero-based page and size, then report the totals
//! over the filtered set.

use std::collections::BTreeMap;

use esglens_core::models::news::{CategoryCount, NewsItem, Page, YearCount};

use crate::current_year;

fn items(org_id: u64) -> Vec<NewsItem> {
    let year = current_year();
    let (org_name, rows): (&str, &[(&str, &str, i16, &str)]) = match org_id {
        1 => (
            "테스트 기업 A",
            &[
                ("지역 아동센터에 학습 기기 기부", "기부", 0, "기부,아동"),
                ("임직원 연탄 나눔 봉사활동", "봉사", 0, "봉사,연탄"),
                ("사내 친환경 캠페인으로 일회용품 절감", "환경", 1, "환경,캠페인"),
                ("청년 대상 코딩 교육 프로그램 운영", "교육", 1, "교육,청년"),
                ("지역 채용 박람회 후원", "일자리", 2, "일자리,채용"),
                ("전통시장 상생 협약 체결", "지역사회", 2, "지역사회,상생"),
            ],
        ),
        _ => (
            "테스트 기업 B",
            &[
                ("장학 재단 설립", "교육", 0, "교육,장학"),
                ("하천 정화 봉사", "환경", 1, "환경,봉사"),
            ],
        ),
    };

    rows.iter()
        .enumerate()
        .map(|(idx, (title, category, years_back, keywords))| NewsItem {
            id: org_id * 100 + idx as u64 + 1,
            organization_name: org_name.to_string(),
            title: title.to_string(),
            description: format!("{org_name}의 {category} 활동 보도입니다."),
            url: format!("https://news.example.com/{org_id}/{}", idx + 1),
            published_date: format!("{}-06-0{}", year - years_back, idx % 9 + 1),
            category: category.to_string(),
            matched_keywords: keywords.to_string(),
        })
        .collect()
}

fn published_year(item: &NewsItem) -> Option<i16> {
    item.published_date.get(..4)?.parse().ok()
}

pub fn news_page(
    org_id: u64,
    page: u32,
    size: u32,
    year: Option<i16>,
    category: Option<&str>,
) -> Page<NewsItem> {
    let filtered: Vec<NewsItem> = items(org_id)
        .into_iter()
        .filter(|item| year.is_none_or(|y| published_year(item) == Some(y)))
        .filter(|item| category.is_none_or(|c| item.category == c))
        .collect();

    if size == 0 {
        return Page::empty();
    }

    let total_elements = filtered.len() as u64;
    let total_pages = filtered.len().div_ceil(size as usize) as u32;
    let start = (page as usize).saturating_mul(size as usize);
    let content = filtered
        .into_iter()
        .skip(start)
        .take(size as usize)
        .collect();

    Page {
        content,
        total_pages,
        total_elements,
    }
}

/// Per-year article counts, ascending by year, matching the live
/// `stats/by-year` shape.
pub fn news_by_year(org_id: u64) -> Vec<YearCount> {
    let mut counts: BTreeMap<i16, u64> = BTreeMap::new();
    for item in items(org_id) {
        if let Some(year) = published_year(&item) {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Per-category article counts, descending by count.
pub fn news_by_category(org_id: u64) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for item in items(org_id) {
        *counts.entry(item.category).or_insert(0) += 1;
    }
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    out
}
