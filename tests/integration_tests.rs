use anyhow::Result;
use std::process::Command;
use svgmap_etl::core::Pipeline;
use svgmap_etl::{
    extract_regions_from_file, CliConfig, EtlEngine, EtlError, LocalStorage, Region,
    RegionFilter, SvgMapPipeline,
};
use tempfile::TempDir;

const COUNTY_MAP: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" viewBox="-13347 -36535 57464 65388">
  <path id="background" d="M-13347-36535h57464v65388h-57464z"/>
  <g id="counties">
    <path id="Hennepin" d="M2 2 L3 3"/>
    <path id="Ramsey" d="m10,10 l5,0 0,5 z"/>
    <path d="M99 99"/>
    <path id="Anoka"/>
  </g>
  <path id="outline-state" d="M0 0"/>
</svg>"#;

fn cli_config(dir: &TempDir) -> CliConfig {
    CliConfig {
        input_path: dir.path().join("map.svg").to_string_lossy().into_owned(),
        output_path: dir.path().join("out/counties.json").to_string_lossy().into_owned(),
        exclude_prefixes: vec!["outline".to_string(), "background".to_string()],
        dry_run: false,
        verbose: false,
    }
}

#[test]
fn test_end_to_end_writes_pretty_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("map.svg"), COUNTY_MAP)?;

    let engine = EtlEngine::new(SvgMapPipeline::new(
        LocalStorage::current_dir(),
        cli_config(&temp_dir),
    ));
    let summary = engine.run()?;

    assert_eq!(summary.region_count, 3);
    let written = std::fs::read_to_string(temp_dir.path().join("out/counties.json"))?;
    assert_eq!(
        written,
        r#"[
  {
    "id": "Hennepin",
    "path": "M2 2 L3 3"
  },
  {
    "id": "Ramsey",
    "path": "m10,10 l5,0 0,5 z"
  },
  {
    "id": "Anoka",
    "path": null
  }
]"#
    );

    let parsed: Vec<Region> = serde_json::from_str(&written)?;
    assert_eq!(parsed, extract_regions_from_file(temp_dir.path().join("map.svg"), &RegionFilter::default())?);
    Ok(())
}

#[test]
fn test_two_runs_produce_identical_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("map.svg"), COUNTY_MAP)?;
    let output = temp_dir.path().join("out/counties.json");

    let engine = EtlEngine::new(SvgMapPipeline::new(
        LocalStorage::current_dir(),
        cli_config(&temp_dir),
    ));

    engine.run()?;
    let first = std::fs::read(&output)?;
    engine.run()?;
    let second = std::fs::read(&output)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_only_decoration_writes_empty_array() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("map.svg"),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="outline" d="M0 0"/></svg>"#,
    )?;

    let engine = EtlEngine::new(SvgMapPipeline::new(
        LocalStorage::current_dir(),
        cli_config(&temp_dir),
    ));
    let summary = engine.run()?;

    assert_eq!(summary.region_count, 0);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("out/counties.json"))?,
        "[]"
    );
    Ok(())
}

#[test]
fn test_missing_input_fails_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let engine = EtlEngine::new(SvgMapPipeline::new(
        LocalStorage::current_dir(),
        cli_config(&temp_dir),
    ));
    let err = engine.run().unwrap_err();

    assert!(matches!(err, EtlError::InputRead { .. }));
    assert!(!temp_dir.path().join("out/counties.json").exists());
    Ok(())
}

#[test]
fn test_malformed_svg_is_parse_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("map.svg"), "<svg><path id=\"a\">")?;

    let engine = EtlEngine::new(SvgMapPipeline::new(
        LocalStorage::current_dir(),
        cli_config(&temp_dir),
    ));
    let err = engine.run().unwrap_err();

    assert!(matches!(err, EtlError::XmlParse { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_pipeline_phases_can_run_separately() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("map.svg"), COUNTY_MAP)?;
    let pipeline = SvgMapPipeline::new(LocalStorage::new(temp_dir.path()), {
        let mut config = CliConfig::default();
        config.input_path = "map.svg".to_string();
        config.output_path = "counties.json".to_string();
        config
    });

    let regions = pipeline.extract()?;
    assert_eq!(regions[0], Region::new("Hennepin", Some("M2 2 L3 3")));

    let result = pipeline.transform(regions)?;
    let output = pipeline.load(result)?;

    assert_eq!(output, "counties.json");
    assert!(temp_dir.path().join("counties.json").exists());
    Ok(())
}

#[test]
fn test_binary_uses_fixed_filenames() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("Map_of_Minnesota_counties_blank.svg"),
        COUNTY_MAP,
    )?;

    let output = Command::new(env!("CARGO_BIN_EXE_svgmap-etl"))
        .current_dir(temp_dir.path())
        .env("RUST_LOG", "off")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Successfully extracted 3 counties to minnesota_counties.json"));
    assert!(temp_dir.path().join("minnesota_counties.json").exists());
    Ok(())
}

#[test]
fn test_binary_reports_missing_input_gracefully() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = Command::new(env!("CARGO_BIN_EXE_svgmap-etl"))
        .current_dir(temp_dir.path())
        .env("RUST_LOG", "off")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error processing SVG file"));
    assert!(!stderr.contains("panicked"));
    Ok(())
}

#[test]
fn test_binary_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("map.svg"), COUNTY_MAP)?;

    let output = Command::new(env!("CARGO_BIN_EXE_svgmap-etl"))
        .current_dir(temp_dir.path())
        .args(["--input", "map.svg", "--output", "map.json", "--dry-run"])
        .env("RUST_LOG", "off")
        .output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("would extract 3 counties"));
    assert!(!temp_dir.path().join("map.json").exists());
    Ok(())
}

#[test]
fn test_binary_refuses_to_overwrite_input_via_dot_prefix() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("map.svg"), COUNTY_MAP)?;

    let output = Command::new(env!("CARGO_BIN_EXE_svgmap-etl"))
        .current_dir(temp_dir.path())
        .args(["--input", "map.svg", "--output", "./map.svg"])
        .env("RUST_LOG", "off")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("Output path must differ"));
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("map.svg"))?,
        COUNTY_MAP
    );
    Ok(())
}

#[test]
fn test_latin1_map_round_trips_to_utf8_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut svg = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<svg xmlns="http://www.w3.org/2000/svg"><path id="Lac qui Parle" d="M0 0"/><path id="Caf"#
        .to_vec();
    svg.push(0xe9);
    svg.extend_from_slice(br#"" d="M1 1"/></svg>"#);
    std::fs::write(temp_dir.path().join("map.svg"), svg)?;

    let engine = EtlEngine::new(SvgMapPipeline::new(
        LocalStorage::current_dir(),
        cli_config(&temp_dir),
    ));
    let summary = engine.run()?;

    assert_eq!(summary.region_count, 2);
    let written = std::fs::read_to_string(temp_dir.path().join("out/counties.json"))?;
    let regions: Vec<Region> = serde_json::from_str(&written)?;
    assert_eq!(regions[1], Region::new("Caf\u{e9}", Some("M1 1")));
    Ok(())
}

#[test]
fn test_utf16_map_with_bom_is_extracted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut svg = vec![0xff, 0xfe];
    svg.extend(COUNTY_MAP.encode_utf16().flat_map(u16::to_le_bytes));
    std::fs::write(temp_dir.path().join("map.svg"), svg)?;

    let regions = extract_regions_from_file(temp_dir.path().join("map.svg"), &RegionFilter::default())?;

    let ids: Vec<&str> = regions.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["Hennepin", "Ramsey", "Anoka"]);
    Ok(())
}
