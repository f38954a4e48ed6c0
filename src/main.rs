// ==========================================
// 短路电流计算器 - 命令行入口
// ==========================================
// 用法:
//   short-circuit-calc <输出.xlsx> <母线名,逗号分隔> <显示名称,逗号分隔> <输入文件...>
//
// 示例:
//   short-circuit-calc results.xlsx "DS1,DS2" "Name1,Name2" a.csv b.csv
// ==========================================

use short_circuit_calc::app::AppState;
use short_circuit_calc::engine::TracingSink;
use short_circuit_calc::i18n::t_with_args;
use short_circuit_calc::{logging, APP_NAME, VERSION};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("{} v{}", APP_NAME, VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!(
            "用法: short-circuit-calc <输出.xlsx> <母线名,逗号分隔> <显示名称,逗号分隔> <输入文件...>"
        );
        std::process::exit(2);
    }

    let output_path = PathBuf::from(&args[0]);
    let keys_input = &args[1];
    let names_input = &args[2];
    let files: Vec<PathBuf> = args[3..].iter().map(PathBuf::from).collect();

    let state = AppState::with_default_config();
    let sink = TracingSink;

    let summary = state.run_calculation(&files, keys_input, names_input, &sink)?;
    println!("{}", serde_json::to_string(&summary)?);

    let bytes = state.export_results()?;
    std::fs::write(&output_path, bytes)?;
    tracing::info!(
        "{}",
        t_with_args(
            "export.done",
            &[("path", output_path.display().to_string().as_str())]
        )
    );

    Ok(())
}
