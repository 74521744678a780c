// ==========================================
// DGA Duval 诊断引擎 - 命令行入口
// ==========================================
// 用法:
//   dga-duval duval-pct <ch4> <c2h4>
//   dga-duval duval-ppm <ch4> <c2h4> <c2h2>
//   dga-duval screen <o2> <n2> <age> <h2> <ch4> <c2h6> <c2h4> <c2h2> <co> <co2>
//   dga-duval svg <ch4> <c2h4> <c2h2>
//
// 配置: DGA_DUVAL_CONFIG 指向 JSON 配置文件 (可选)
// 输出: stdout 为 JSON / SVG,日志写 stderr
// ==========================================

use anyhow::{anyhow, bail, Context, Result};
use dga_duval::{
    i18n, logging, AgeBracket, ConfigManager, DuvalApi, Gas, GasPanel, ScreeningApi,
    ScreeningRequest,
};

fn main() -> Result<()> {
    logging::init();

    let config = load_config()?;
    i18n::set_locale(&config.config().locale);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => bail!(i18n::t("cli.usage")),
    };

    tracing::debug!(command, version = dga_duval::VERSION, "dga-duval 启动");

    match command {
        "duval-pct" => {
            let [ch4, c2h4] = parse_numbers::<2>(rest)?;
            let diagnosis = DuvalApi::new(&config).diagnose_sliders(ch4, c2h4)?;
            println!("{}", serde_json::to_string_pretty(&diagnosis)?);
        }
        "duval-ppm" => {
            let [ch4, c2h4, c2h2] = parse_numbers::<3>(rest)?;
            let diagnosis = DuvalApi::new(&config).diagnose_ppm(ch4, c2h4, c2h2)?;
            println!("{}", serde_json::to_string_pretty(&diagnosis)?);
        }
        "screen" => {
            let request = parse_screening_request(rest)?;
            let report = ScreeningApi::new(&config).screen(&request)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "svg" => {
            let [ch4, c2h4, c2h2] = parse_numbers::<3>(rest)?;
            let api = DuvalApi::new(&config);
            let diagnosis = api.diagnose_percentages(ch4, c2h4, c2h2)?;
            println!("{}", api.render_svg(Some(&diagnosis)));
        }
        other => bail!("未知命令: {}\n{}", other, i18n::t("cli.usage")),
    }

    Ok(())
}

fn load_config() -> Result<ConfigManager> {
    let manager = match std::env::var("DGA_DUVAL_CONFIG") {
        Ok(path) if !path.trim().is_empty() => ConfigManager::from_file(path.trim())?,
        _ => ConfigManager::new(),
    };
    Ok(manager.with_env_overrides()?)
}

fn parse_number(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("无法解析数值: {}", raw))
}

fn parse_numbers<const N: usize>(args: &[String]) -> Result<[f64; N]> {
    if args.len() != N {
        bail!("需要 {} 个数值参数,实际 {} 个\n{}", N, args.len(), i18n::t("cli.usage"));
    }
    let mut values = [0.0; N];
    for (slot, raw) in values.iter_mut().zip(args) {
        *slot = parse_number(raw)?;
    }
    Ok(values)
}

/// O2/N2 传 "-" 表示未测
fn parse_optional(raw: &str) -> Result<Option<f64>> {
    if raw.trim() == "-" {
        return Ok(None);
    }
    parse_number(raw).map(Some)
}

fn parse_screening_request(args: &[String]) -> Result<ScreeningRequest> {
    if args.len() != 3 + Gas::ALL.len() {
        bail!(
            "screen 需要 O2 N2 年龄段 以及 {} 种气体读数\n{}",
            Gas::ALL.len(),
            i18n::t("cli.usage")
        );
    }

    let o2_ppm = parse_optional(&args[0])?;
    let n2_ppm = parse_optional(&args[1])?;
    let age = AgeBracket::from_str(&args[2]).ok_or_else(|| anyhow!("未知年龄段: {}", args[2]))?;

    let mut panel = GasPanel::new();
    for (gas, raw) in Gas::ALL.iter().zip(&args[3..]) {
        panel.set(*gas, parse_number(raw)?);
    }

    Ok(ScreeningRequest {
        o2_ppm,
        n2_ppm,
        age,
        panel,
    })
}
