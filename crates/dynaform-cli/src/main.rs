//! # dynaform-cli
//!
//! Command-line host for the dynamic form engine.
//!
//! This binary plays the application-shell role: it owns the record store,
//! drives form sessions, and turns session outcomes into terminal output.

mod render;

use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;

use dynaform_schema::{FieldDescriptor, FormType, SchemaCatalog};
use dynaform_session::Error as SessionError;
use dynaform_session::{Disposition, EditContext, FormSession};
use dynaform_store::RecordStore;
use dynaform_validation::validate_field;

#[derive(Parser)]
#[command(name = "dynaform")]
#[command(about = "Dynamic form engine CLI")]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// List the form types in the catalog
    Types,

    /// Show the field schema for a form type
    Fields {
        /// Form type identifier (e.g. userInfo)
        form_type: String,
    },

    /// Run the validator over a single field value
    Check {
        /// Field name the rule table is keyed by
        field: String,

        /// Raw value to validate
        value: String,
    },

    /// Fill out a form and submit it
    Submit {
        /// Form type identifier (e.g. userInfo)
        form_type: String,

        /// Field assignment (repeatable)
        #[arg(short, long, value_name = "NAME=VALUE")]
        set: Vec<String>,
    },

    /// Scripted create, edit, and delete walkthrough
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog = Arc::new(SchemaCatalog::builtin());

    match cli.command {
        Commands::Types => cmd_types(&catalog),
        Commands::Fields { form_type } => cmd_fields(&catalog, &form_type),
        Commands::Check { field, value } => cmd_check(&field, &value),
        Commands::Submit { form_type, set } => cmd_submit(&catalog, &form_type, &set),
        Commands::Demo => cmd_demo(&catalog),
    }
}

fn cmd_types(catalog: &SchemaCatalog) -> anyhow::Result<()> {
    for form_type in catalog.form_types() {
        println!("{form_type} - {}", form_type.heading());
    }
    Ok(())
}

fn cmd_fields(catalog: &SchemaCatalog, form_type: &str) -> anyhow::Result<()> {
    let form_type: FormType = form_type.parse()?;
    let fields = catalog.lookup(form_type)?;

    println!("{} ({form_type})", form_type.heading());
    for field in fields {
        let required = if field.required { "required" } else { "optional" };
        println!("  {:<16} {:<9} {required}  {}", field.name, field.kind.as_str(), field.label);
        if !field.options.is_empty() {
            println!("      options: {}", field.options.join(", "));
        }
    }
    Ok(())
}

fn cmd_check(field: &str, value: &str) -> anyhow::Result<()> {
    // The probe treats the named field as required, which is how the form
    // applies the rule table to its own declared fields
    let descriptor = FieldDescriptor::text(field, field).required();
    let result = validate_field(&descriptor, value);
    if result.is_valid {
        println!("{field}: ok");
        Ok(())
    } else {
        println!("{field}: {}", result.message.unwrap_or_default());
        bail!("Validation failed");
    }
}

fn cmd_submit(
    catalog: &Arc<SchemaCatalog>,
    form_type: &str,
    assignments: &[String],
) -> anyhow::Result<()> {
    let form_type: FormType = form_type.parse()?;
    let mut session = FormSession::new(Arc::clone(catalog));
    session.select_type(form_type)?;

    for assignment in assignments {
        let (name, value) = assignment.split_once('=').with_context(|| {
            format!("Invalid field assignment '{assignment}', expected NAME=VALUE")
        })?;
        session.change_field(name, value);
    }

    match session.submit() {
        Ok(submission) => {
            let (_, record) = submission.into_record();
            println!("Form submitted successfully!");
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Err(SessionError::ValidationFailed(report)) => {
            for (field, message) in report.iter() {
                eprintln!("  {field}: {message}");
            }
            bail!("Please fix validation errors before submitting.");
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_demo(catalog: &Arc<SchemaCatalog>) -> anyhow::Result<()> {
    let mut store = RecordStore::new();
    let mut session = FormSession::new(Arc::clone(catalog));

    // Create a user record
    session.select_type(FormType::UserInfo)?;
    session.change_field("firstName", "Ann");
    session.change_field("lastName", "Lee");
    session.change_field("age", "30");
    let ann = store.append(session.submit()?.into_record().1);
    println!("Form submitted successfully!");

    // And an address record
    session.select_type(FormType::Address)?;
    session.change_field("street", "42 Main St");
    session.change_field("city", "Austin");
    session.change_field("state", "Texas");
    session.change_field("zipCode", "731301");
    store.append(session.submit()?.into_record().1);
    println!("Form submitted successfully!");
    println!();
    println!("{}", render::render_table(&store, catalog));

    // Revise the first record through an edit session
    let record = store.get(ann).context("record should exist")?;
    session.load_for_edit(EditContext::for_record(ann, record))?;
    println!("You are editing a form.");
    session.change_field("age", "31");
    let (disposition, revised) = session.submit()?.into_record();
    if let Disposition::Updated(id) = disposition {
        store.replace(id, revised)?;
    }
    println!("Changes saved successfully!");
    println!();
    println!("{}", render::render_table(&store, catalog));

    // Delete it; the other record keeps its id
    store.remove(ann)?;
    println!("Form deleted successfully.");
    println!();
    println!("{}", render::render_table(&store, catalog));
    Ok(())
}
