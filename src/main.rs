use clap::Parser;
use top_scores::core::Diagnostics;
use top_scores::utils::logger;
use top_scores::{
    CliConfig, LocalStorage, NullDiagnostics, ScorePipeline, TopScoresEngine, TracingDiagnostics,
};

fn main() {
    let cli = CliConfig::parse();

    // 驗證配置，失敗時不碰資料檔
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            if cli.debug {
                logger::init_cli_logger(cli.log_format.unwrap_or_default());
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 {}", e.user_friendly_message());
            }
            std::process::exit(e.exit_code());
        }
    };

    let diagnostics: Box<dyn Diagnostics> = if config.debug {
        logger::init_cli_logger(config.log_format);
        tracing::debug!("Run config: {:?}", config);
        Box::new(TracingDiagnostics)
    } else {
        Box::new(NullDiagnostics)
    };

    let pipeline = ScorePipeline::new(LocalStorage, config, diagnostics);
    let engine = TopScoresEngine::new(pipeline);

    let stdout = std::io::stdout();
    let exit_code = engine.run_to_exit_code(&mut stdout.lock());
    std::process::exit(exit_code);
}
