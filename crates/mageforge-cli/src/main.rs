use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mageforge::{
    create_admin_ui, create_api, create_model, create_module, AdminUiOptions, FieldName,
    ModuleName, ModuleOptions, PackageName, TypePath,
};

#[derive(Debug, Parser)]
#[command(name = "mageforge", version, about = "Scaffold Magento 2 modules")]
struct Cli {
    /// Module root directory
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a module skeleton: registration, module.xml, composer.json
    Module {
        /// Module name, e.g. Acme_Sales
        name: ModuleName,
        /// Composer package name, e.g. acme/module-sales
        package: PackageName,
        /// Author used in the copyright header
        #[arg(short, long, default_value = "Acme")]
        author: String,
        /// Package description
        #[arg(long, default_value = "A Magento 2 module.")]
        description: String,
        /// Package version
        #[arg(long, default_value = "1.0.0")]
        version: String,
        /// SPDX license identifier, omitted when not given
        #[arg(long)]
        license: Option<String>,
    },
    /// Create a model, its resource model and collection
    Model {
        /// Module name, e.g. Acme_Sales
        module: ModuleName,
        /// Model path below Model, use backslash as separator
        path: TypePath,
        /// Main database table
        table: String,
        /// Primary key field
        #[arg(long, default_value = "id")]
        id_field: String,
    },
    /// Create a data interface and its DataObject model
    Api {
        /// Module name, e.g. Acme_Sales
        module: ModuleName,
        /// Type path below Api/Data and Model
        path: TypePath,
        /// snake_case field names to generate accessors for
        #[arg(required = true)]
        fields: Vec<FieldName>,
    },
    /// Create a CRUD list page for the admin panel
    AdminUi {
        /// Module name, e.g. Acme_Sales
        module: ModuleName,
        /// Controller path below Controller/Adminhtml
        controller_path: TypePath,
        /// Model path below Model
        model_path: TypePath,
        /// Admin route id, also used as the front name
        #[arg(short, long)]
        route: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = cli.dir;

    let created = match cli.command {
        Command::Module {
            name,
            package,
            author,
            description,
            version,
            license,
        } => create_module(
            &root,
            &ModuleOptions {
                name,
                package,
                author,
                description,
                version,
                license,
            },
        )
        .context("failed to create module skeleton")?,
        Command::Model {
            module,
            path,
            table,
            id_field,
        } => create_model(&root, &module, &path, &table, &id_field)
            .context("failed to create model classes")?,
        Command::Api {
            module,
            path,
            fields,
        } => create_api(&root, &module, &path, &fields)
            .context("failed to create api data interface")?,
        Command::AdminUi {
            module,
            controller_path,
            model_path,
            route,
        } => create_admin_ui(
            &root,
            &AdminUiOptions {
                module,
                controller_path,
                model_path,
                route,
            },
        )
        .context("failed to create admin ui files")?,
    };

    if created.is_empty() {
        println!("nothing to do, all target files already exist");
    } else {
        for path in &created {
            println!("created {}", path.display());
        }
    }
    Ok(())
}
