use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use degviz_cli::config::{Config, DEFAULT_INPUT};
use degviz_cli::pipeline::{self, CLEAN_CSV, DISTRIBUTIONS_PNG, LOLLIPOP_PNG, TOP_CSV, VOLCANO_PNG};
use degviz_core::DegvizError;
use degviz_stats::volcano::volcano_points;
use degviz_stats::{clean, detect_columns, ColumnOverrides, Thresholds};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

const ALL_OUTPUTS: [&str; 5] = [CLEAN_CSV, TOP_CSV, VOLCANO_PNG, LOLLIPOP_PNG, DISTRIBUTIONS_PNG];

fn write_xlsx(path: &Path, headers: &[&str], rows: &[(&str, f64, f64)]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    for (c, h) in headers.iter().enumerate() {
        ws.write(0, c as u16, *h).unwrap();
    }
    for (r, (gene, fc, p)) in rows.iter().enumerate() {
        let r = r as u32 + 1;
        ws.write(r, 0, *gene).unwrap();
        ws.write(r, 1, *fc).unwrap();
        ws.write(r, 2, *p).unwrap();
    }
    wb.save(path).unwrap();
}

fn config_for(root: &Path) -> Config {
    let mut config = Config::default();
    config.paths.root = root.to_path_buf();
    config.plot.dpi = 30;
    config
}

fn outputs(root: &Path) -> PathBuf {
    root.join("outputs")
}

#[test]
fn single_gene_end_to_end() {
    let tmp = TempDir::new().unwrap();
    write_xlsx(
        &tmp.path().join(DEFAULT_INPUT),
        &["Gene", "log2FC", "p_value"],
        &[("TP53", 2.0, 0.001)],
    );

    let report = pipeline::run(&config_for(tmp.path())).unwrap();
    assert_eq!(report.rows_read, 1);
    assert_eq!(report.rows_kept, 1);
    assert_eq!(report.summary.significant, 1);
    assert_eq!(report.summary.up, 1);

    for name in ALL_OUTPUTS {
        assert!(outputs(tmp.path()).join(name).is_file(), "missing {name}");
    }
    let names: Vec<_> = report
        .saved
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, [CLEAN_CSV, VOLCANO_PNG, LOLLIPOP_PNG, DISTRIBUTIONS_PNG, TOP_CSV]);

    let cleaned = fs::read_to_string(outputs(tmp.path()).join(CLEAN_CSV)).unwrap();
    let mut lines = cleaned.lines();
    assert_eq!(lines.next(), Some("gene_id,logfc,pval"));
    let row: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(row[0], "TP53");
    assert_eq!(row[1].parse::<f64>().unwrap(), 2.0);
    assert_eq!(row[2].parse::<f64>().unwrap(), 0.001);
    assert_eq!(lines.next(), None);

    let top = fs::read_to_string(outputs(tmp.path()).join(TOP_CSV)).unwrap();
    assert_eq!(top.lines().next(), Some("gene_id,logfc,pval,neglog10_p"));
    assert_eq!(top.lines().count(), 2);
}

#[test]
fn significance_flag_for_single_gene() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("in.xlsx");
    write_xlsx(&path, &["Gene", "log2FC", "p_value"], &[("TP53", 2.0, 0.001)]);

    let table = degviz_io::read_table(&path).unwrap();
    let cols = detect_columns(table.headers(), &ColumnOverrides::default()).unwrap();
    let working = clean(table, &cols);
    let points = volcano_points(&working, &Thresholds::default());
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].gene, "TP53");
    assert!(points[0].significant);
    assert!((points[0].neg_log10_p - 3.0).abs() < 1e-9);
}

#[test]
fn top_table_keeps_twenty_lowest_p_values() {
    let tmp = TempDir::new().unwrap();
    let genes: Vec<String> = (0..30).map(|i| format!("G{i}")).collect();
    let rows: Vec<(&str, f64, f64)> = genes
        .iter()
        .enumerate()
        .map(|(i, g)| (g.as_str(), i as f64 - 15.0, (i + 1) as f64 / 1000.0))
        .collect();
    write_xlsx(&tmp.path().join(DEFAULT_INPUT), &["symbol", "log2FoldChange", "pvalue"], &rows);

    pipeline::run(&config_for(tmp.path())).unwrap();

    let top = fs::read_to_string(outputs(tmp.path()).join(TOP_CSV)).unwrap();
    let genes: Vec<&str> = top.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
    let expected: Vec<String> = (0..20).map(|i| format!("G{i}")).collect();
    assert_eq!(genes, expected);
}

#[test]
fn missing_fold_change_column_leaves_no_outputs() {
    let tmp = TempDir::new().unwrap();
    write_xlsx(
        &tmp.path().join(DEFAULT_INPUT),
        &["Gene", "score", "p_value"],
        &[("TP53", 2.0, 0.001)],
    );

    let err = pipeline::run(&config_for(tmp.path())).unwrap_err();
    assert!(matches!(err, DegvizError::ColumnNotFound(_)));
    assert!(!outputs(tmp.path()).exists());
}

#[test]
fn csv_input_with_forced_columns() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("de.csv");
    fs::write(
        &input,
        "id,effect,significance,name\n\
         1,2.5,0.0,BRCA1\n\
         2,-1.5,0.01,KRAS\n\
         3,,0.2,EGFR\n\
         4,0.1,NA,MYC\n",
    )
    .unwrap();

    let mut config = config_for(tmp.path());
    config.paths.input = Some(input);
    config.columns.log_fc = Some("effect".into());
    config.columns.p_value = Some("significance".into());
    config.columns.gene_id = Some("name".into());

    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.rows_read, 4);
    assert_eq!(report.rows_kept, 2);
    assert_eq!(report.summary.significant, 2);
    assert_eq!(report.summary.down, 1);

    let cleaned = fs::read_to_string(outputs(tmp.path()).join(CLEAN_CSV)).unwrap();
    assert_eq!(cleaned.lines().next(), Some("id,logfc,pval,gene_id"));
    assert_eq!(cleaned.lines().count(), 3);
}

#[test]
fn near_overflow_fold_changes_complete() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("de.csv");
    fs::write(&input, "gene,logFC,pval\nA,1e308,0.01\nB,-1e308,0.02\nC,0.5,0.3\n").unwrap();

    let mut config = config_for(tmp.path());
    config.paths.input = Some(input);
    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.rows_kept, 3);
    for name in ALL_OUTPUTS {
        assert!(outputs(tmp.path()).join(name).is_file(), "missing {name}");
    }
}

#[test]
fn binary_runs_without_arguments() {
    let tmp = TempDir::new().unwrap();
    write_xlsx(
        &tmp.path().join(DEFAULT_INPUT),
        &["Gene", "log2FC", "p_value"],
        &[("TP53", 2.0, 0.001), ("GAPDH", 0.1, 0.8)],
    );

    let out = Command::new(env!("CARGO_BIN_EXE_degviz"))
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "DONE",
            "Saved: gse86202_clean.csv",
            "Saved: volcano_gse86202.png",
            "Saved: lollipop_top20.png",
            "Saved: distributions.png",
            "Saved: top20_genes.csv",
        ]
    );
    for name in ALL_OUTPUTS {
        assert!(outputs(tmp.path()).join(name).is_file());
    }
}

#[test]
fn binary_exits_one_when_columns_missing() {
    let tmp = TempDir::new().unwrap();
    write_xlsx(
        &tmp.path().join(DEFAULT_INPUT),
        &["Gene", "log2FC", "score"],
        &[("TP53", 2.0, 0.001)],
    );

    let out = Command::new(env!("CARGO_BIN_EXE_degviz"))
        .arg("--root")
        .arg(tmp.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim_end(),
        "Could not detect required columns."
    );
    assert!(!outputs(tmp.path()).exists());
}

#[test]
fn binary_reports_missing_input_on_stderr() {
    let tmp = TempDir::new().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_degviz"))
        .arg("--root")
        .arg(tmp.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}
