use crate::infra::{parse_choices, InMemorySubmissionRepository};
use clap::Args;
use marketer_dna::config::AppConfig;
use marketer_dna::diagnosis::{Answer, DiagnosisEngine, PersonalizedResult, ShareCode};
use marketer_dna::error::AppError;
use marketer_dna::quiz::{MarketerType, QuestionBank, QuizSession};
use marketer_dna::submissions::{
    calculate_percentage, DiagnosisService, SalaryCompareRequest, SalaryInfo, SalaryReport,
    StatisticsSnapshot, SubmissionRequest,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Marketer type: b2c, b2b or ecommerce
    #[arg(long = "type", default_value = "b2c")]
    pub(crate) marketer_type: MarketerType,
    /// Number of questions (defaults to QUIZ_LENGTH)
    #[arg(long)]
    pub(crate) length: Option<usize>,
    /// Seed for a reproducible question order
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Comma-separated 1-based choices to answer without prompting
    #[arg(long)]
    pub(crate) choices: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// JSON file holding an array of answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ShareArgs {
    /// Share code such as `NpyA:Q1,Q2,Q3,Q4`
    pub(crate) code: String,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// CSV export with client_id, marketer_type, years_of_experience, salary, share_code, created_at
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Years of experience to compare a salary against
    #[arg(long, requires = "salary")]
    pub(crate) years: Option<u8>,
    /// Salary in units of 10,000 KRW
    #[arg(long, requires = "years")]
    pub(crate) salary: Option<u32>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of simulated respondents
    #[arg(long, default_value_t = 60)]
    pub(crate) respondents: usize,
    /// Seed for the simulated answers
    #[arg(long, default_value_t = 7)]
    pub(crate) seed: u64,
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let QuizArgs {
        marketer_type,
        length,
        seed,
        choices,
        json,
    } = args;

    let length = match length {
        Some(length) => length,
        None => AppConfig::load()?.diagnosis.quiz_length,
    };
    let mut scripted = parse_choices(choices.as_deref().unwrap_or_default())
        .map_err(|reason| io::Error::new(io::ErrorKind::InvalidInput, reason))?
        .into_iter();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let bank = QuestionBank::bundled()?;
    let engine = DiagnosisEngine::default();
    let mut session = QuizSession::start(&bank, marketer_type, length, &mut rng)?;
    let mut lines = io::stdin().lock().lines();

    println!("{} 진단을 시작합니다", marketer_type.display_name());
    while let Some(question) = session.current_question() {
        let (answered, expected) = session.progress();
        println!(
            "\n[{}/{}] {} ({} · {})",
            answered + 1,
            expected,
            question.question,
            question.category,
            question.difficulty.label()
        );
        for (position, choice) in question.choices.iter().enumerate() {
            println!("  {}. {}", position + 1, choice.text);
        }

        let index = match scripted.next() {
            Some(index) => index,
            None => prompt_choice(&mut lines, question.choices.len())?,
        };
        session.answer(index, &mut rng)?;
    }

    let result = session.finish(&engine)?;
    let code = session.share_code()?;
    print_result(&result, Some(&code), json)
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let file = std::fs::File::open(&args.answers)?;
    let answers: Vec<Answer> = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    let bank = QuestionBank::bundled()?;
    let result = DiagnosisEngine::default().analyze(&answers)?;
    let code = bank.share_code_for(&answers).ok();
    print_result(&result, code.as_ref(), args.json)
}

pub(crate) fn run_share(args: ShareArgs) -> Result<(), AppError> {
    let bank = QuestionBank::bundled()?;
    let code = ShareCode::decode(&args.code)?;
    let answers = code.answers(&bank)?;
    let result = DiagnosisEngine::default().analyze(&answers)?;
    print_result(&result, Some(&code), args.json)
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(config.diagnosis.salary_trim_ratio)?;

    let file = std::fs::File::open(&args.csv)?;
    let imported = service.import_csv(file)?;
    println!("{}건의 제출 기록을 불러왔습니다", imported);

    let snapshot = service.statistics()?;
    render_statistics(&snapshot);

    if let (Some(years_of_experience), Some(salary)) = (args.years, args.salary) {
        let report = service.compare_salary(SalaryCompareRequest {
            salary_info: SalaryInfo {
                years_of_experience,
                salary,
            },
            answers: Vec::new(),
        })?;
        render_salary(&report);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_service(marketer_dna::submissions::DEFAULT_TRIM_RATIO)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let respondents = args.respondents.max(1);

    println!("Marketer DNA demo: {} simulated respondents", respondents);
    let mut first = None;
    for index in 0..respondents {
        let marketer_type = MarketerType::ALL[index % MarketerType::ALL.len()];
        let answers = simulate_answers(service.bank(), marketer_type, &mut rng)?;
        let years_of_experience: u8 = rng.random_range(0..=15);
        let salary = 2800 + u32::from(years_of_experience) * 320 + rng.random_range(0..1500);

        let record = service.submit(SubmissionRequest {
            client_id: Some(format!("demo-{index:03}")),
            marketer_type: Some(marketer_type),
            answers,
            salary_info: Some(SalaryInfo {
                years_of_experience,
                salary,
            }),
        })?;
        if first.is_none() {
            first = Some(record);
        }
    }

    let snapshot = service.statistics()?;
    render_statistics(&snapshot);

    if let Some(record) = first {
        println!("\n첫 번째 응답자 ({})", record.client_id.as_str());
        let code = service.encode_share(&record.answers)?;
        print_result(&record.result, Some(&code), false)?;

        if let Some(rank) = snapshot.persona_rank(record.persona()) {
            println!(
                "\n같은 유형 {}명 · {}개 유형 중 {}위",
                rank.count, rank.personas, rank.rank
            );
        }
        if let Some(salary_info) = record.salary_info {
            let report = service.compare_salary(SalaryCompareRequest {
                salary_info,
                answers: record.answers.clone(),
            })?;
            render_salary(&report);
        }
    }

    Ok(())
}

fn build_service(
    trim_ratio: f64,
) -> Result<DiagnosisService<InMemorySubmissionRepository>, AppError> {
    let bank = Arc::new(QuestionBank::bundled()?);
    let repository = Arc::new(InMemorySubmissionRepository::default());
    DiagnosisService::new(repository, bank)
        .with_trim_ratio(trim_ratio)
        .map_err(|err| AppError::Diagnosis(err.into()))
}

fn simulate_answers<R: Rng>(
    bank: &QuestionBank,
    marketer_type: MarketerType,
    rng: &mut R,
) -> Result<Vec<Answer>, AppError> {
    let mut session = QuizSession::start(bank, marketer_type, 10, rng)?;
    while let Some(question) = session.current_question() {
        let index = rng.random_range(0..question.choices.len()) as u8;
        session.answer(index, rng)?;
    }
    Ok(session.answers().to_vec())
}

fn prompt_choice<B: BufRead>(lines: &mut io::Lines<B>, count: usize) -> Result<u8, AppError> {
    loop {
        print!("선택 (1-{count}): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the quiz finished",
                )
                .into())
            }
        };
        match line.trim().parse::<u8>() {
            Ok(choice) if (1..=count).contains(&usize::from(choice)) => return Ok(choice - 1),
            _ => println!("1부터 {count} 사이의 숫자를 입력하세요"),
        }
    }
}

fn print_result(
    result: &PersonalizedResult,
    code: Option<&ShareCode>,
    json: bool,
) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
        println!("{rendered}");
        return Ok(());
    }

    println!("\n마케팅 DNA: {}", result.marketing_dna);
    println!("퍼스널 컬러: {}", result.personal_colors.join(", "));
    println!("총점: {}", result.total_score);

    println!("\n태그별 점수");
    let mut scores: Vec<_> = result.tag_scores.iter().collect();
    scores.sort_by_key(|(_, score)| score.rank);
    for (tag, score) in scores {
        println!(
            "  {:>2}. {} {}점 ({}, 선택 {}%)",
            score.rank,
            tag,
            score.score,
            score.level.label(),
            score.percentage
        );
    }

    println!("\n강점");
    for strength in &result.top_strengths {
        println!("  - {} ({}점): {}", strength.title, strength.score, strength.description);
    }
    println!("성장 영역");
    for area in &result.growth_areas {
        println!("  - {} ({}점): {}", area.tag, area.score, area.guidance);
    }
    println!("추천");
    for recommendation in &result.recommendations {
        println!("  - {recommendation}");
    }
    if !result.suitable_roles.is_empty() {
        println!("어울리는 역할: {}", result.suitable_roles.join(", "));
    }
    if !result.skill_development.is_empty() {
        println!("키울 스킬: {}", result.skill_development.join(", "));
    }
    println!(
        "스타일: {} / {}",
        result.marketing_style.approach, result.marketing_style.decision_making
    );
    if !result.recommended_technologies.tools.is_empty() {
        println!(
            "추천 도구: {}",
            result.recommended_technologies.tools.join(", ")
        );
    }
    if let Some(code) = code {
        println!("\n공유 코드: {code}");
    }

    Ok(())
}

fn render_statistics(snapshot: &StatisticsSnapshot) {
    println!("\n전체 응답 {}건", snapshot.total);

    println!("유형 분포");
    for (label, count) in snapshot.ranked_personas().into_iter().take(5) {
        println!(
            "  - {}: {}명 ({}%)",
            label,
            count,
            calculate_percentage(count, snapshot.total)
        );
    }

    let mut tags: Vec<(&String, &u64)> = snapshot.answer_count.iter().collect();
    tags.sort_by(|a, b| b.1.cmp(a.1));
    println!("많이 선택된 태그");
    for (tag, count) in tags.into_iter().take(5) {
        let users = snapshot
            .unique_user_tag_count
            .get(tag)
            .copied()
            .unwrap_or(0);
        println!("  - {}: {}회 · {}명", tag, count, users);
    }
}

fn render_salary(report: &SalaryReport) {
    let comparison = &report.comparison;
    println!(
        "\n연봉 비교 ({}년차, {})",
        comparison.years_of_experience,
        comparison.experience_group.label()
    );
    println!(
        "  - 평균 {}만원 · {}명 중 {}위 · 백분위 {:.1} ({})",
        comparison.average_salary,
        comparison.total_count,
        comparison.my_rank,
        comparison.percentile,
        comparison.band
    );
    for question in report.per_question.iter().filter(|entry| entry.count > 0) {
        if let Some(average) = question.average_salary {
            println!(
                "  - {}: 같은 선택 {}명 평균 {}만원",
                question.question_id, question.count, average
            );
        }
    }
}
