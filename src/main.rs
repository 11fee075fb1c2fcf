/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 命令行入口：gd_compare [config.json]
 *
 * 读取配置与数据，训练四种梯度下降，打印汇总表，
 * 并把代价曲线图、CSV、npy 与 JSON 报告写入输出目录。
 * 日志级别由环境变量 RUST_LOG 控制。
 */

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use gd_compare::config::RunConfig;
use gd_compare::data::Table;
use gd_compare::optim::ComparisonRunner;
use gd_compare::visual::{CostChart, export, summary_table};

fn main() -> Result<()> {
    env_logger::init();
    let start_time = Instant::now();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_file(&path).with_context(|| format!("加载配置 {} 失败", path))?,
        None => RunConfig::default(),
    };

    // ========== 1. 加载数据 ==========
    println!("[1/4] 加载数据 {:?}...", config.data_path);
    let table = Table::read_csv(&config.data_path)
        .with_context(|| format!("读取 {:?} 失败", config.data_path))?;
    println!("  ✓ {} 行 × {} 列", table.len(), table.headers().len());

    // ========== 2. 预处理 ==========
    println!("\n[2/4] 标签编码、标准化、补截距列...");
    let (fitted, data) = config
        .preprocessor()
        .fit_transform(&table)
        .context("预处理失败")?;
    println!(
        "  ✓ 设计矩阵 {} × {}（{} 个特征）",
        data.samples(),
        data.params(),
        fitted.feature_names().len()
    );

    // ========== 3. 训练 ==========
    let hp = config.hyperparams;
    println!("\n[3/4] 训练配置：");
    println!("  - 学习率: {}", hp.learning_rate);
    println!("  - Epochs: {}", hp.epochs);
    println!("  - Batch Size: {}", hp.batch_size);
    println!("  - 动量: {}", hp.momentum);
    let comparison = ComparisonRunner::new(hp)
        .seed(config.seed)
        .parallel(config.parallel)
        .run(&data, &data.zero_theta())
        .context("训练失败")?;
    println!("\n{}", summary_table(&comparison));

    // ========== 4. 输出 ==========
    println!("[4/4] 写入结果到 {:?}...", config.output_dir);
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("创建目录 {:?} 失败", config.output_dir))?;
    let series = comparison.series();
    let dir = &config.output_dir;
    let chart = CostChart::default().log_scale(config.log_scale);
    chart.save_svg(&series, dir.join("cost_comparison.svg"))?;
    chart.save(&series, dir.join("cost_comparison.png"))?;
    export::write_csv(&series, dir.join("cost_history.csv"))?;
    export::write_npy(&series, dir.join("cost_history.npy"))?;
    export::write_report(&comparison, dir.join("report.json"))?;

    println!("  ✓ 完成，总耗时 {:.2}s", start_time.elapsed().as_secs_f32());
    Ok(())
}
