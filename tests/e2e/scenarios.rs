use licensepins::{
    Config, DecodeError, Resolution, SchemaVersion, resolve_manifest, resolve_manifests,
};

use super::harness::{TestContext, describe, expect_lines};

pub struct Scenario {
    pub name: &'static str,
    pub run: fn(&TestContext) -> Result<(), String>,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "v1_fixture_listing",
            run: scenario_v1_listing,
        },
        Scenario {
            name: "v1_fixture_with_yaml_renames",
            run: scenario_v1_yaml_renames,
        },
        Scenario {
            name: "v2_fixture_mixed_outcomes",
            run: scenario_v2_mixed,
        },
        Scenario {
            name: "v3_fixture",
            run: scenario_v3,
        },
        Scenario {
            name: "several_manifests_one_broken",
            run: scenario_several_manifests,
        },
        Scenario {
            name: "unsupported_version",
            run: scenario_unsupported_version,
        },
    ]
}

fn resolve_fixture(
    ctx: &TestContext,
    relative: &str,
    config: &Config,
) -> Result<Vec<String>, String> {
    let bytes = ctx.read_fixture(relative)?;
    let resolutions = resolve_manifest(&bytes, config).map_err(|e| e.to_string())?;
    Ok(resolutions.iter().map(describe).collect())
}

fn scenario_v1_listing(ctx: &TestContext) -> Result<(), String> {
    let lines = resolve_fixture(ctx, "v1/Package.resolved", &Config::default())?;
    expect_lines(
        &lines,
        &[
            "name: APIKit, display: APIKit, owner: ishkawa, version: 4.1.0, source: https://github.com/ishkawa/APIKit",
            "name: Commander, display: Commander, owner: kylef, version: 0.8.0, source: https://github.com/kylef/Commander",
            "name: HeliumLogger, display: HeliumLogger, owner: Kitura, version: 1.8.1, source: https://github.com/Kitura/HeliumLogger",
            "name: LoggerAPI, display: LoggerAPI, owner: Kitura, version: 1.8.1, source: https://github.com/Kitura/LoggerAPI",
            "name: Result, display: Result, owner: antitypical, version: 4.1.0, source: https://github.com/antitypical/Result",
            "name: Spectre, display: Spectre, owner: kylef, version: 0.9.0, source: https://github.com/kylef/Spectre",
            "name: swift-html-entities, display: HTMLEntities, owner: Kitura, version: 3.0.13, source: https://github.com/Kitura/swift-html-entities",
            "name: YamlSwift, display: Yaml, owner: behrang, version: 3.4.4, source: https://github.com/behrang/YamlSwift",
        ],
    )
}

fn scenario_v1_yaml_renames(ctx: &TestContext) -> Result<(), String> {
    let config = ctx.load_config("license_plist.yml")?;
    let bytes = ctx.read_fixture("v1/Package.resolved")?;
    let resolutions = resolve_manifest(&bytes, &config).map_err(|e| e.to_string())?;

    let entities = resolutions
        .iter()
        .filter_map(Resolution::identity)
        .find(|identity| identity.name == "swift-html-entities")
        .ok_or("swift-html-entities missing")?;
    if entities.display_name != "HTML Entities" {
        return Err(format!(
            "rename not applied, display name is {}",
            entities.display_name
        ));
    }

    // `exclude` is not ours to act on
    if resolutions.len() != 8 {
        return Err(format!("expected 8 dependencies, got {}", resolutions.len()));
    }
    Ok(())
}

fn scenario_v2_mixed(ctx: &TestContext) -> Result<(), String> {
    let config = Config::default().with_rename("LicensePlist", "License Plist");
    let lines = resolve_fixture(ctx, "v2/Package.resolved", &config)?;
    expect_lines(
        &lines,
        &[
            "name: DZNEmptyDataSet, display: dznemptydataset, owner: dzenbot, version: -, source: https://github.com/dzenbot/DZNEmptyDataSet",
            "name: LicensePlist, display: License Plist, owner: mono0926, version: 3.24.0, source: https://github.com/mono0926/LicensePlist",
            "name: R.swift.Library, display: r.swift.library, owner: mac-cain13, version: -, source: https://github.com/mac-cain13/R.swift.Library",
            "unresolved: adventofcode2018, location: https://mbuchetics@bitbucket.org/mbuchetics/adventofcode2018.git",
            "name: Version, display: version, owner: mxcl, version: 2.0.1, source: https://github.com/mxcl/Version",
        ],
    )
}

fn scenario_v3(ctx: &TestContext) -> Result<(), String> {
    let lines = resolve_fixture(ctx, "v3/Package.resolved", &Config::default())?;
    expect_lines(
        &lines,
        &[
            "name: swift-argument-parser, display: swift-argument-parser, owner: apple, version: 1.5.0, source: https://github.com/apple/swift-argument-parser",
            "unresolved: local-pkg, location: ../local-pkg",
        ],
    )
}

fn scenario_several_manifests(ctx: &TestContext) -> Result<(), String> {
    let v1 = ctx.read_fixture("v1/Package.resolved")?;
    let v2 = ctx.read_fixture("v2/Package.resolved")?;
    let broken = br#"{"object": {"pins": [{"package": "A", "repositoryURL": "x", "state": {}}]}, "version": 1}"#;

    let results = resolve_manifests(
        [v1.as_slice(), broken.as_slice(), v2.as_slice()],
        &Config::default(),
    );

    match &results[..] {
        [Ok(first), Err(DecodeError::Invalid { schema, field, .. }), Ok(third)] => {
            if *schema != SchemaVersion::V1 || field != "object.pins[0].state.revision" {
                return Err(format!("unexpected decode error at {} ({})", field, schema));
            }
            if first.len() != 8 || third.len() != 5 {
                return Err(format!(
                    "unexpected counts: {} and {}",
                    first.len(),
                    third.len()
                ));
            }
            Ok(())
        }
        other => Err(format!("unexpected results: {:?}", other)),
    }
}

fn scenario_unsupported_version(_ctx: &TestContext) -> Result<(), String> {
    match resolve_manifest(br#"{"pins": [], "version": 9}"#, &Config::default()) {
        Err(DecodeError::UnsupportedVersion { version: 9 }) => Ok(()),
        other => Err(format!("expected unsupported version, got {:?}", other)),
    }
}
