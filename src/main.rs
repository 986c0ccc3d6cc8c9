use anyhow::Context;
use clap::Parser;
use interest_calc::config::Command;
use interest_calc::core::batch::run_batch;
use interest_calc::core::report::render_missing_fields;
use interest_calc::core::SettingsProvider;
use interest_calc::utils::{logger, validation::Validate};
use interest_calc::{
    CalcError, CliConfig, InterestEngine, InterestKind, TomlConfig, ValidationPolicy,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(&cli, &settings) {
        // context 包裝過的錯誤仍可取回 CalcError 來決定結束碼
        let calc_error = e.downcast_ref::<CalcError>();
        tracing::error!(
            "❌ Calculation failed: {:#} (Category: {:?})",
            e,
            calc_error.map(|c| c.category())
        );

        match calc_error {
            Some(c) => {
                // 空白欄位逐一顯示提示
                if let CalcError::MissingFields { kind, fields } = c {
                    for line in render_missing_fields(*kind, fields) {
                        eprintln!("❌ {}", line);
                    }
                } else {
                    eprintln!("❌ {}", c.user_friendly_message());
                }
                eprintln!("💡 Suggestion: {}", c.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }

        std::process::exit(calc_error.map(|c| c.exit_code()).unwrap_or(3));
    }

    Ok(())
}

fn load_settings(cli: &CliConfig) -> interest_calc::Result<TomlConfig> {
    cli.validate()?;

    // 未指定配置檔時使用預設值
    let mut settings = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };

    // 應用命令列覆蓋設定
    if cli.lenient {
        settings.validation.policy = ValidationPolicy::Lenient;
        tracing::info!("🔧 Validation policy overridden to lenient");
    }

    settings.validate()?;
    Ok(settings)
}

fn run(cli: &CliConfig, settings: &TomlConfig) -> anyhow::Result<()> {
    let engine = InterestEngine::new(settings.validation_policy());
    let style = settings.report_style();

    let (kind, form) = match &cli.command {
        Command::Simple(args) => {
            let kind = InterestKind::Simple;
            (kind, args.to_form(settings.default_rate(kind)))
        }
        Command::Compound { form, frequency } => {
            let kind = InterestKind::Compound;
            (
                kind,
                form.to_form(settings.default_rate(kind))
                    .with_frequency(frequency.as_str()),
            )
        }
        Command::Batch { input, output } => {
            let reader = File::open(input)
                .map(BufReader::new)
                .map_err(CalcError::from)
                .with_context(|| format!("opening {}", input.display()))?;

            let summary = match output {
                Some(path) => {
                    let writer = File::create(path)
                        .map(BufWriter::new)
                        .map_err(CalcError::from)
                        .with_context(|| format!("creating {}", path.display()))?;
                    run_batch(&engine, reader, writer)?
                }
                None => run_batch(&engine, reader, io::stdout().lock())?,
            };

            eprintln!(
                "✅ {} rows calculated, {} failed",
                summary.succeeded(),
                summary.failed
            );
            return Ok(());
        }
    };

    let calculation = engine.calculate(kind, &form)?;
    let rendered = style.render(&calculation, cli.format)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).map_err(CalcError::from)?;
    Ok(())
}
