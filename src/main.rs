//! Domain Hunter - find purchasable domain names
//!
//! Generates candidate names for a keyword (heuristics, plus AI when an
//! API key is configured), checks DNS/WHOIS registration signals, and
//! prints available domains first.

use domain_hunter::{
    batch::BatchCoordinator,
    hunt::{HuntConfig, HuntLoop},
    llm,
    policy::PolicyStore,
    resolve::AvailabilityResolver,
    score::QualityScorer,
    sink::ResultSink,
    synth::NameSynthesizer,
    types::{BatchConfig, DomainQuery, ResolveConfig, Seed, VerdictStatus},
    Result,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = domain_hunter::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    let hunt_mode = args.len() > 1 && args[1] == "--hunt";
    let keyword = if hunt_mode {
        args[2..].join(" ")
    } else {
        args[1..].join(" ")
    };

    if let Err(e) = run(&keyword, hunt_mode).await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }

    Ok(())
}

async fn run(keyword: &str, hunt_mode: bool) -> Result<()> {
    println!("🔎 Domain Hunter");
    println!("════════════════");
    println!();

    let store = PolicyStore::open(settings_path());
    let policy = store.handle();
    let synthesizer = NameSynthesizer::new(Arc::clone(&policy));
    let scorer = QualityScorer::new(Arc::clone(&policy));

    let resolver = Arc::new(AvailabilityResolver::new(ResolveConfig::default()));
    let coordinator = Arc::new(BatchCoordinator::new(resolver, BatchConfig::default()));

    let seed = if keyword.is_empty() {
        println!("🎲 No keyword given, hunting at random");
        Seed::random()
    } else {
        println!("🎯 Hunting names for: \"{}\"", keyword);
        Seed::keyword(keyword)
    };

    if hunt_mode {
        return run_hunt(synthesizer, coordinator, scorer, seed).await;
    }

    let count = env_usize("HUNTER_COUNT", 10);
    let candidates = match llm::from_env() {
        Some(generator) if !keyword.is_empty() => {
            println!("🤖 Generating candidates with AI...");
            synthesizer.synthesize_ai(generator.as_ref(), keyword, count).await
        }
        _ => synthesizer.synthesize(&seed, count),
    };

    if candidates.is_empty() {
        println!("😔 No candidates could be generated for this input.");
        return Ok(());
    }

    let domains: Vec<DomainQuery> = candidates
        .iter()
        .flat_map(|candidate| {
            extensions()
                .into_iter()
                .map(move |ext| DomainQuery::new(candidate.name.clone(), ext))
        })
        .collect();

    println!(
        "🔍 Checking {} domains ({} names × {} extensions)...",
        domains.len(),
        candidates.len(),
        extensions().len()
    );

    let bar = ProgressBar::new(domains.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let verdicts = coordinator
        .check_all_with_progress(&domains, |done, _total| {
            bar.set_position(done as u64);
        })
        .await;
    bar.finish_and_clear();

    let sink = ResultSink::new(results_dir());
    let category = if keyword.is_empty() { "random" } else { keyword };

    println!();
    let available: Vec<_> = verdicts
        .iter()
        .filter(|v| v.status == VerdictStatus::Available)
        .collect();
    if !available.is_empty() {
        println!("🎉 Available ({}):", available.len());
        println!("──────────────────");
        for verdict in &available {
            let score = scorer.score(&verdict.domain.name);
            println!(
                "✅ {:<24} Kalite: {}/100  ({} ms)",
                verdict.domain.full_domain(),
                score,
                verdict.response_time_ms
            );
            sink.append_verdict(
                &verdict.domain.name,
                &verdict.domain.extension,
                category,
                verdict,
                score,
            );
        }
        println!();
    }

    let unknown: Vec<_> = verdicts
        .iter()
        .filter(|v| v.status == VerdictStatus::Unknown)
        .collect();
    if !unknown.is_empty() {
        println!("❓ Unknown ({}):", unknown.len());
        for verdict in &unknown {
            println!("❓ {}", verdict.domain.full_domain());
        }
        println!();
    }

    let taken: Vec<_> = verdicts
        .iter()
        .filter(|v| v.status == VerdictStatus::Taken)
        .collect();
    if !taken.is_empty() {
        println!("❌ Taken ({}):", taken.len());
        for verdict in &taken {
            match &verdict.registrar {
                Some(registrar) => {
                    println!("❌ {} ({})", verdict.domain.full_domain(), registrar)
                }
                None => println!("❌ {}", verdict.domain.full_domain()),
            }
        }
        println!();
    }

    println!("📊 Summary: {} available, {} taken, {} unknown", available.len(), taken.len(), unknown.len());
    if !available.is_empty() {
        println!("💾 Available domains saved under {}/", results_dir());
    }

    Ok(())
}

async fn run_hunt(
    synthesizer: NameSynthesizer,
    coordinator: Arc<BatchCoordinator>,
    scorer: QualityScorer,
    seed: Seed,
) -> Result<()> {
    let interval = Duration::from_secs(env_usize("HUNTER_INTERVAL_SECS", 300) as u64);
    println!(
        "⏳ Hunt mode: a fresh batch every {}s, Ctrl-C to stop",
        interval.as_secs()
    );

    let config = HuntConfig {
        interval,
        seed,
        batch_size: env_usize("HUNTER_COUNT", 10),
        extensions: extensions(),
        category: "hunt".to_string(),
    };
    let hunt = HuntLoop::new(
        synthesizer,
        coordinator,
        scorer,
        ResultSink::new(results_dir()),
        config,
    );

    let (tx, rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        let _ = tx.send(true);
    });

    let stats = hunt.run(rx).await;
    println!(
        "🏁 Hunt finished: {} rounds, {} domains checked, {} available found",
        stats.rounds, stats.checked, stats.available_found
    );
    Ok(())
}

fn extensions() -> Vec<String> {
    match env::var("HUNTER_TLDS") {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('.') {
                    s.to_string()
                } else {
                    format!(".{}", s)
                }
            })
            .collect(),
        Err(_) => vec![
            ".com".to_string(),
            ".net".to_string(),
            ".org".to_string(),
            ".io".to_string(),
        ],
    }
}

fn settings_path() -> String {
    env::var("HUNTER_SETTINGS").unwrap_or_else(|_| ".domain-hunter/settings.json".to_string())
}

fn results_dir() -> String {
    env::var("HUNTER_RESULTS_DIR").unwrap_or_else(|_| "results".to_string())
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn print_help() {
    println!("🔎 Domain Hunter - find purchasable domain names");
    println!("════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-hunter [KEYWORD]           # one batch for a keyword");
    println!("    domain-hunter                     # one random batch");
    println!("    domain-hunter --hunt [KEYWORD]    # keep hunting on a timer");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    OPENAI_API_KEY         enable AI-assisted name generation");
    println!("    OPENAI_BASE_URL        OpenAI-compatible endpoint override");
    println!("    OPENAI_MODEL           model name (default: gpt-4.1-mini)");
    println!("    HUNTER_TLDS            comma list (default: com,net,org,io)");
    println!("    HUNTER_COUNT           candidates per batch (default: 10)");
    println!("    HUNTER_INTERVAL_SECS   hunt mode interval (default: 300)");
    println!("    HUNTER_SETTINGS        policy settings file path");
    println!("    HUNTER_RESULTS_DIR     sink directory (default: results)");
}
