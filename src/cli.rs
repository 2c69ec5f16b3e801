// src/cli.rs
//! `iggy-cli`: print a filtered listing to stdout.
//!
//! ```text
//! iggy-cli teachers --department Science
//! iggy-cli courses --grade-level 10 --type Honors --format tsv --include-headers
//! iggy-cli courses --facets
//! iggy-cli menu --data-dir ./public
//! ```
//!
//! Rows go to stdout as CSV/TSV, the "Showing N of M" line to stderr.
//! A missing source file is an error exit carrying the notice text.

use std::io::{ self, Write };
use std::path::PathBuf;

use clap::{ Args, Parser, Subcommand, ValueEnum };
use color_eyre::eyre::{ Report, Result };

use crate::config::options::{ AppOptions, ExportFormat, ExportOptions, PageKind };
use crate::csv::to_export_string;
use crate::data::Catalog;
use crate::error::LoadError;
use crate::model::{ Course, CourseField, FieldKey, MenuItem, Record, Teacher, TeacherField };
use crate::store;

#[derive(Parser, Debug)]
#[command(name = "iggy-cli")]
#[command(about = "Query the faculty directory, course catalog and lunch menu")]
pub struct Cli {
    /// Directory holding the source files [default: $IGGY_DATA_DIR or ./public]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Emit a header line first
    #[arg(long, global = true, default_value_t = false)]
    pub include_headers: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Faculty directory
    Teachers(TeacherArgs),
    /// Course catalog
    Courses(CourseArgs),
    /// Weekly hot lunch menu (unfiltered)
    Menu,
}

#[derive(Args, Debug, Default)]
pub struct TeacherArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    /// List dropdown values instead of rows
    #[arg(long)]
    pub facets: bool,
}

#[derive(Args, Debug, Default)]
pub struct CourseArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub course_num: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub grade_level: Option<String>,
    #[arg(long = "type")]
    pub course_type: Option<String>,
    /// List dropdown values instead of rows
    #[arg(long)]
    pub facets: bool,
}

impl TeacherArgs {
    fn filters(&self) -> Vec<(TeacherField, &str)> {
        let pairs = [
            (TeacherField::Name, &self.name),
            (TeacherField::Titles, &self.title),
            (TeacherField::Departments, &self.department),
        ];
        pairs.into_iter().filter_map(|(f, v)| v.as_deref().map(|t| (f, t))).collect()
    }
}

impl CourseArgs {
    fn filters(&self) -> Vec<(CourseField, &str)> {
        let pairs = [
            (CourseField::Title, &self.title),
            (CourseField::CourseNum, &self.course_num),
            (CourseField::Subjects, &self.subject),
            (CourseField::GradeLevels, &self.grade_level),
            (CourseField::Type, &self.course_type),
        ];
        pairs.into_iter().filter_map(|(f, v)| v.as_deref().map(|t| (f, t))).collect()
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut options = AppOptions::default();
    if let Some(dir) = cli.data_dir {
        options.data.set_dir(dir);
    }
    options.export.format = cli.format.into();
    options.export.include_headers = cli.include_headers;

    let text = render(&cli.command, &options)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Build the full stdout text for one command.
pub fn render(command: &Command, options: &AppOptions) -> Result<String> {
    match command {
        Command::Teachers(args) => {
            let cat = load_catalog::<Teacher>(options, PageKind::Teachers, &args.filters())?;
            Ok(listing(&cat, args.facets, &options.export))
        }
        Command::Courses(args) => {
            let cat = load_catalog::<Course>(options, PageKind::Courses, &args.filters())?;
            Ok(listing(&cat, args.facets, &options.export))
        }
        Command::Menu => {
            let path = options.data.path_for(PageKind::Menu);
            let items = store::load_menu(&path).map_err(into_report)?;
            eprintln!("{} menu item(s)", items.len());

            let headers = MenuItem::headers();
            let rows: Vec<Vec<String>> = items.iter().map(|i| i.to_row()).collect();
            Ok(export_text(&options.export, &headers, &rows))
        }
    }
}

fn load_catalog<R: Record>(
    options: &AppOptions,
    kind: PageKind,
    filters: &[(R::Field, &str)],
) -> Result<Catalog<R>> {
    let path = options.data.path_for(kind);
    let records = store::load_records::<R>(&path).map_err(into_report)?;

    let mut cat = Catalog::from_records(path, records);
    for &(field, text) in filters {
        cat.filters_mut().set(field, text);
    }
    cat.refilter();
    Ok(cat)
}

fn listing<R: Record>(cat: &Catalog<R>, facets: bool, export: &ExportOptions) -> String {
    if facets {
        let headers = vec![s!("facet"), s!("value")];
        let rows: Vec<Vec<String>> = R::Field::facets()
            .iter()
            .flat_map(|&f| cat.facet(f).iter().map(move |v| vec![s!(f.name()), v.clone()]))
            .collect();
        return export_text(export, &headers, &rows);
    }

    eprintln!("{}", cat.summary());
    let (headers, rows) = cat.export_rows();
    export_text(export, &headers, &rows)
}

fn export_text(export: &ExportOptions, headers: &[String], rows: &[Vec<String>]) -> String {
    let headers = export.include_headers.then_some(headers);
    to_export_string(headers, rows, export.format.delim())
}

fn into_report(e: LoadError) -> Report {
    let notice = e.notice();
    Report::new(e).wrap_err(notice)
}
