use crate::infra::{build_interpreter, InMemoryExperienceStore};
use clap::Args;
use meq30::config::AppConfig;
use meq30::error::AppError;
use meq30::questionnaire::AnswerSet;
use meq30::scoring::ScoreEncoding;
use meq30::submission::{Evaluation, QuestionnaireView, SubmissionService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping canonical item ids to responses (0-5)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Interpretation locale (defaults to the text repository default)
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Locale for item wording and scale labels
    #[arg(long, default_value = "en")]
    pub(crate) locale: String,
}

fn service() -> Result<SubmissionService<InMemoryExperienceStore>, AppError> {
    let config = AppConfig::load()?;
    let interpreter = build_interpreter(&config.interpretation)?;
    Ok(SubmissionService::new(
        Arc::new(InMemoryExperienceStore::default()),
        interpreter,
    ))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        locale,
        json,
    } = args;

    let raw = std::fs::read_to_string(&answers)?;
    let answers: AnswerSet = serde_json::from_str(&raw).map_err(std::io::Error::from)?;
    let evaluation = service()?.evaluate(&answers, locale.as_deref())?;

    if json {
        let rendered = serde_json::to_string_pretty(&evaluation).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_score_report(&evaluation);
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let view = service()?.questionnaire(Some(&args.locale));
    render_questionnaire(&view);
    Ok(())
}

pub(crate) fn render_score_report(evaluation: &Evaluation) {
    let scores = &evaluation.scores;
    let interpretation = &evaluation.interpretation;

    println!("MEQ-30 scores");
    for subscale in scores.subscales() {
        println!(
            "- {}: {:.1}% (mean {:.2}, {}/{} items)",
            subscale.subscale.label(),
            subscale.value(ScoreEncoding::Percentage),
            subscale.value(ScoreEncoding::Mean),
            subscale.sum,
            usize::from(subscale.item_count) * 5
        );
    }
    println!("Overall mean: {:.2}", scores.overall_mean());
    println!(
        "Complete mystical experience: {}",
        if scores.complete_mystical() { "yes" } else { "no" }
    );

    println!("\nFactor ranking");
    for reading in &interpretation.factors {
        let marker = if reading.meets_threshold { " *" } else { "" };
        println!(
            "- {} ({}){}",
            reading.subscale.label(),
            reading.band.label(),
            marker
        );
    }

    println!(
        "\nInterpretation [{} {} / {}]",
        interpretation.key, interpretation.version, interpretation.locale
    );
    println!("{}", interpretation.paragraph);
}

pub(crate) fn render_questionnaire(view: &QuestionnaireView) {
    println!("MEQ-30 questionnaire ({})", view.locale);
    for item in &view.items {
        println!(
            "{:>2}. [{} / {}] {}",
            item.order,
            item.canonical_id,
            item.subscale.label(),
            item.text
        );
    }

    println!("\nResponse scale");
    for anchor in &view.scale {
        println!("  {} = {}", anchor.value, anchor.label);
    }
}
