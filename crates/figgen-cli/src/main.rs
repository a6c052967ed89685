use clap::{Parser, Subcommand};
use figgen_analyze::{quality_metrics, suggestions};
use figgen_codegen::Generator;
use figgen_schema::{
    AccessibilityReport, Classify, ComponentMetadata, CustomCode, FileDocument, Framework,
    GeneratedComponent, GenerationOptions, NameClassifier, QualityMetrics,
    ResponsiveBreakpoints, Styling, Suggestion,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "figgen")]
#[command(about = "figgen — design-document to component code generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate component artifacts from a design-document JSON export
    Generate {
        /// Input design-document JSON file
        path: String,

        /// Output directory for generated files
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Target framework: react, nextjs, vue, svelte, html
        #[arg(long, default_value = "react")]
        framework: String,

        /// Styling approach: tailwind, styled-components, css-modules,
        /// emotion, sass, vanilla
        #[arg(long, default_value = "tailwind")]
        styling: String,

        /// Skip the type-declaration artifact
        #[arg(long)]
        no_typescript: bool,

        /// Also emit a test-suite artifact per component
        #[arg(long)]
        tests: bool,

        /// File with custom JavaScript to inject into component bodies
        #[arg(long)]
        custom_js: Option<String>,

        /// File with custom CSS to append to stylesheets
        #[arg(long)]
        custom_css: Option<String>,

        /// File with custom animation rules to append to stylesheets
        #[arg(long)]
        custom_animations: Option<String>,
    },

    /// List the nodes that one generation pass would process
    Inspect {
        /// Input design-document JSON file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            path,
            out,
            framework,
            styling,
            no_typescript,
            tests,
            custom_js,
            custom_css,
            custom_animations,
        } => {
            let options = GenerationOptions {
                framework: parse_framework(&framework),
                styling: parse_styling(&styling),
                typescript: !no_typescript,
                unit_tests: tests,
                ..Default::default()
            };
            let custom = CustomCode {
                script: custom_js.as_deref().map(read_source).unwrap_or_default(),
                styles: custom_css.as_deref().map(read_source).unwrap_or_default(),
                animations: custom_animations.as_deref().map(read_source).unwrap_or_default(),
            };
            cmd_generate(&path, &out, options, custom);
        }
        Command::Inspect { path } => cmd_inspect(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn read_document(path: &str) -> FileDocument {
    let source = read_source(path);
    match serde_json::from_str(&source) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error parsing {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_framework(value: &str) -> Framework {
    match value {
        "react" => Framework::React,
        "nextjs" => Framework::Nextjs,
        "vue" => Framework::Vue,
        "svelte" => Framework::Svelte,
        "html" => Framework::Html,
        other => {
            eprintln!("Error: unknown framework: {other}");
            std::process::exit(1);
        }
    }
}

fn parse_styling(value: &str) -> Styling {
    match value {
        "tailwind" => Styling::Tailwind,
        "styled-components" => Styling::StyledComponents,
        "css-modules" => Styling::CssModules,
        "emotion" => Styling::Emotion,
        "sass" => Styling::Sass,
        "vanilla" => Styling::Vanilla,
        other => {
            eprintln!("Error: unknown styling approach: {other}");
            std::process::exit(1);
        }
    }
}

/// Per-component entry in `figgen-report.json`. Artifact bodies live in
/// their own files; the report carries only the analysis records.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportEntry<'a> {
    id: &'a str,
    name: &'a str,
    metadata: &'a ComponentMetadata,
    accessibility: &'a AccessibilityReport,
    responsive: &'a ResponsiveBreakpoints,
    quality: QualityMetrics,
    suggestions: Vec<Suggestion>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureEntry {
    node_id: String,
    node_name: String,
    error: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    file: &'a str,
    components: Vec<ReportEntry<'a>>,
    failures: Vec<FailureEntry>,
}

fn cmd_generate(path: &str, out: &Path, options: GenerationOptions, custom: CustomCode) {
    let file = read_document(path);

    let generator = Generator::new(&file, options).with_custom_code(custom);
    let report = generator.generate_with_progress(|p| {
        eprintln!("[{}/{}] {}", p.index + 1, p.total, p.node_name);
    });

    if let Err(e) = std::fs::create_dir_all(out) {
        eprintln!("Error creating {}: {e}", out.display());
        std::process::exit(1);
    }

    let names = output_names(&report.components);
    for (component, base) in report.components.iter().zip(&names) {
        if base != &component.name {
            eprintln!(
                "Warning: duplicate component name {}; writing files as {}",
                component.name, base
            );
        }
        for (file_name, body) in artifact_files(component, base) {
            let dest = out.join(file_name);
            if let Err(e) = std::fs::write(&dest, body) {
                eprintln!("Error writing {}: {e}", dest.display());
                std::process::exit(1);
            }
        }
    }

    let json_report = Report {
        file: &file.name,
        components: report
            .components
            .iter()
            .map(|c| ReportEntry {
                id: &c.id,
                name: &c.name,
                metadata: &c.metadata,
                accessibility: &c.accessibility,
                responsive: &c.responsive,
                quality: quality_metrics(c),
                suggestions: suggestions(c),
            })
            .collect(),
        failures: report
            .failures
            .iter()
            .map(|f| FailureEntry {
                node_id: f.node_id.clone(),
                node_name: f.node_name.clone(),
                error: f.error.to_string(),
            })
            .collect(),
    };

    let report_path = out.join("figgen-report.json");
    match serde_json::to_string_pretty(&json_report) {
        Ok(body) => {
            if let Err(e) = std::fs::write(&report_path, body) {
                eprintln!("Error writing {}: {e}", report_path.display());
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error serializing report: {e}");
            std::process::exit(1);
        }
    }

    for failure in &report.failures {
        eprintln!(
            "Failed: {} ({}): {}",
            failure.node_id, failure.node_name, failure.error
        );
    }
    eprintln!(
        "Generated {} component(s) into {}",
        report.components.len(),
        out.display()
    );
}

/// Per-component output base names. Distinct layer names can sanitize to
/// the same identifier; repeats get the node id appended so no component
/// overwrites another's files.
fn output_names(components: &[GeneratedComponent]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    components
        .iter()
        .map(|c| {
            if seen.insert(c.name.clone()) {
                c.name.clone()
            } else {
                format!("{}_{}", c.name, c.id.replace(':', "-"))
            }
        })
        .collect()
}

/// Filenames for one component's artifacts.
fn artifact_files<'a>(component: &'a GeneratedComponent, name: &str) -> Vec<(String, &'a str)> {
    let mut files = vec![
        (format!("{name}.tsx"), component.markup.as_str()),
        (format!("{name}.css"), component.stylesheet.as_str()),
    ];
    if let Some(ts) = &component.typescript {
        files.push((format!("{name}.d.ts"), ts.as_str()));
    }
    if let Some(tests) = &component.tests {
        files.push((format!("{name}.test.tsx"), tests.as_str()));
    }
    if let Some(stories) = &component.stories {
        files.push((format!("{name}.stories.tsx"), stories.as_str()));
    }
    files
}

fn cmd_inspect(path: &str) {
    let file = read_document(path);
    let generator = Generator::new(&file, GenerationOptions::default());
    let nodes = generator.component_nodes();

    if nodes.is_empty() {
        eprintln!("No component nodes found in {path}");
        return;
    }

    let classifier = NameClassifier;
    for node in nodes {
        println!(
            "{}  {}  category={:?}  complexity={:?}",
            node.id,
            node.name,
            classifier.category(node),
            classifier.complexity(node),
        );
    }
}
