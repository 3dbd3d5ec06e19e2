use std::{
    env, fs,
    io::BufWriter,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use resume_screener::{
    config::ScreeningConfig,
    error::{Result, ScreenError},
    logging::init_tracing,
    screening::{
        model::{BatchReport, CandidateDocument, ReferenceDocument},
        pipeline::{BatchScreener, PlainTextSupplier, ReferenceSet, TextSupplier},
    },
    utils::linguistic::LinguisticResources,
};
use tracing::{error, info, warn};

struct Args {
    resumes: PathBuf,
    roles: PathBuf,
    jd: Option<PathBuf>,
    config: Option<PathBuf>,
    top_n: Option<usize>,
    json: Option<PathBuf>,
    cbor: Option<PathBuf>,
    sequential: bool,
}

fn print_usage() {
    eprintln!("Usage: resume-screener --resumes DIR --roles DIR [--jd FILE] [--config FILE]");
    eprintln!("                       [--top-n N] [--json FILE] [--cbor FILE] [--sequential]");
    eprintln!("Roles are the *.txt files of --roles; the file name becomes the role name.");
    eprintln!("Without --jd, each resume is ranked against its best-fit role.");
}

// ---- 簡易 CLI 引数処理 ----
// Ok(None) はヘルプ表示済み
fn parse_args() -> std::result::Result<Option<Args>, String> {
    let mut args = env::args().skip(1);
    let mut resumes: Option<PathBuf> = None;
    let mut roles: Option<PathBuf> = None;
    let mut jd = None;
    let mut config = None;
    let mut top_n = None;
    let mut json = None;
    let mut cbor = None;
    let mut sequential = false;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--resumes" => resumes = Some(args.next().ok_or("--resumes requires a directory")?.into()),
            "--roles" => roles = Some(args.next().ok_or("--roles requires a directory")?.into()),
            "--jd" => jd = Some(args.next().ok_or("--jd requires a file")?.into()),
            "--config" => config = Some(args.next().ok_or("--config requires a file")?.into()),
            "--json" => json = Some(args.next().ok_or("--json requires a file")?.into()),
            "--cbor" => cbor = Some(args.next().ok_or("--cbor requires a file")?.into()),
            "--top-n" => {
                let v = args.next().ok_or("--top-n requires a number")?;
                match v.parse::<usize>() {
                    Ok(n) if n > 0 => top_n = Some(n),
                    _ => return Err("--top-n needs a positive integer".into()),
                }
            }
            "--sequential" => sequential = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(Some(Args {
        resumes: resumes.ok_or("--resumes is required")?,
        roles: roles.ok_or("--roles is required")?,
        jd,
        config,
        top_n,
        json,
        cbor,
        sequential,
    }))
}

/// Regular files of `dir`, sorted by file name
fn list_files(dir: &Path, extension: Option<&str>) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|source| ScreenError::ConfigIo {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| match extension {
            Some(ext) => p.extension().and_then(|e| e.to_str()) == Some(ext),
            None => true,
        })
        .collect();
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn write_report(report: &BatchReport, json: Option<&Path>, cbor: Option<&Path>) -> Result<()> {
    let create = |path: &Path| {
        fs::File::create(path)
            .map(BufWriter::new)
            .map_err(|source| ScreenError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })
    };
    if let Some(path) = json {
        serde_json::to_writer_pretty(create(path)?, report)
            .map_err(|e| ScreenError::ReportEncode(e.to_string()))?;
        info!(path = %path.display(), "json report written");
    }
    if let Some(path) = cbor {
        serde_cbor::to_writer(create(path)?, report).map_err(|e| ScreenError::ReportEncode(e.to_string()))?;
        info!(path = %path.display(), "cbor report written");
    }
    Ok(())
}

fn print_report(report: &BatchReport) {
    println!("\n=========== RANKED RESUMES ===========\n");
    for (rank, r) in report.results.iter().enumerate() {
        println!("Rank {}: {}", rank + 1, r.id);
        println!("Match Score: {}%", r.score);
        println!("Experience Level: {}", r.experience);
        println!("Extracted Skills: {:?}", r.skills);
        println!("Matched Terms: {:?}", r.matched);
        println!("Missing Terms: {:?}", r.missing);

        println!("\nBias Audit Report:");
        for finding in r.bias_audit.findings() {
            println!("✔ {finding}");
        }
        println!("\nResume Improvement Advice:");
        for tip in &r.advice {
            println!("• {tip}");
        }
        println!("\nRole Fit Analysis:");
        for (role, score) in &r.role_scores {
            println!("• {role} → {score}%");
        }
        println!("Best Fit Role: {}", r.best_role);
        println!("{}", "-".repeat(65));
    }

    if !report.skipped.is_empty() {
        println!("\nSkipped (over budget):");
        for s in &report.skipped {
            println!("• {} ({}ms > {}ms)", s.id, s.elapsed_ms, s.budget_ms);
        }
    }

    let a = &report.analytics;
    println!("\n=========== RECRUITER ANALYTICS ===========\n");
    println!("Total Resumes Screened: {}", a.total_resumes);
    println!("Average Match Score: {} %", a.average_score);
    println!("Strong Hire Candidates: {}", a.strong_hires);
    println!("\nTop Missing Skills:");
    for (skill, count) in &a.top_missing_skills {
        println!("• {skill} ({count})");
    }
    println!("\nBest Fit Role Distribution:");
    for (role, count) in &a.role_distribution {
        println!("• {role}: {count}");
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ScreeningConfig::from_path(path)?,
        None => ScreeningConfig::default(),
    }
    .apply_env()?;
    if let Some(n) = args.top_n {
        config.explain.top_n = n;
    }
    if args.sequential {
        config.parallel = false;
    }

    let supplier = PlainTextSupplier;
    let load_start = Instant::now();
    let candidates: Vec<CandidateDocument> = list_files(&args.resumes, None)?
        .iter()
        .map(|p| CandidateDocument::new(file_name(p), supplier.extract_text(p)))
        .collect();
    let roles: Vec<ReferenceDocument> = list_files(&args.roles, Some("txt"))?
        .iter()
        .map(|p| ReferenceDocument::new(file_name(p), supplier.extract_text(p)))
        .collect();
    let primary = args
        .jd
        .as_deref()
        .map(|p| ReferenceDocument::new(file_name(p), supplier.extract_text(p)));
    if candidates.is_empty() {
        warn!(dir = %args.resumes.display(), "no resumes found");
    }
    info!(
        resumes = candidates.len(),
        roles = roles.len(),
        elapsed_ms = load_start.elapsed().as_millis() as u64,
        "documents loaded"
    );

    let screener = BatchScreener::new(config, LinguisticResources::english())?;
    let report = screener.screen_batch(&candidates, &ReferenceSet::new(primary, roles))?;
    print_report(&report);
    write_report(&report, args.json.as_deref(), args.cbor.as_deref())
}

fn main() -> ExitCode {
    init_tracing("info");
    let program_start = Instant::now();
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("[error] {msg}");
            print_usage();
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => {
            info!(elapsed_ms = program_start.elapsed().as_millis() as u64, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "screening failed");
            ExitCode::FAILURE
        }
    }
}
