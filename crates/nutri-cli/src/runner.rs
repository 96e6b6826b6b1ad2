use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::Result as CliResult;
use crate::profile_commands::ProfileCommands;

use nutri_config::Config;
use nutri_core::{
    Client, DietInput, FileStore, MountedView, NutritionApp, NutritionProfile, RecipeInput,
    SharedStore, View,
};

use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// JSON to print plus whether the action failed.
#[derive(Debug)]
pub struct Outcome {
    pub value: Value,
    pub failed: bool,
}

impl Outcome {
    fn ok(value: Value) -> Self {
        Self {
            value,
            failed: false,
        }
    }

    fn from_view(mounted: &MountedView) -> CliResult<Self> {
        Ok(Self {
            value: serde_json::to_value(mounted)?,
            failed: mounted.error().is_some(),
        })
    }
}

/// Opens the app against the configured backend and storage.
pub fn open_app(config: &Config, server: Option<&str>) -> CliResult<NutritionApp> {
    let base_url = server
        .map(String::from)
        .unwrap_or_else(|| config.api.normalized_base_url());
    let storage_path = config.storage_path()?;
    let store: SharedStore = Arc::new(FileStore::open(&storage_path)?);

    info!("Using backend {base_url}, storage {}", storage_path.display());
    Ok(NutritionApp::start(Arc::new(Client::new(&base_url)), store))
}

/// One "page load": restore, act, report.
pub async fn execute(app: &mut NutritionApp, command: Commands) -> CliResult<Outcome> {
    match command {
        Commands::Login { username, password } => {
            let state = app.login(&username, &password).await;
            Ok(Outcome {
                failed: state.error().is_some(),
                value: serde_json::to_value(state)?,
            })
        }

        Commands::Register {
            username,
            password,
            profile,
        } => {
            let initial = NutritionProfile::default().merged(&profile.to_patch());
            let state = app.register(&username, &password, initial).await;
            Ok(Outcome {
                failed: state.error().is_some(),
                value: serde_json::to_value(state)?,
            })
        }

        Commands::Logout => {
            app.logout();
            Ok(Outcome::ok(serde_json::to_value(app.session())?))
        }

        Commands::Whoami => Ok(Outcome::ok(serde_json::to_value(app.session())?)),

        Commands::Profile { action } => match action {
            ProfileCommands::Show => Ok(Outcome::ok(profile_json(app)?)),
            ProfileCommands::Set { fields, sync } => {
                let draft = app.profile().merged(&fields.to_patch());
                app.save_profile(draft)?;
                if sync {
                    app.sync_profile().await?;
                }
                Ok(Outcome::ok(profile_json(app)?))
            }
        },

        Commands::Health => {
            app.navigate(View::Health);
            Outcome::from_view(app.submit_active().await)
        }

        Commands::Diet { food, meal_type } => {
            app.navigate(View::Diet);
            if let MountedView::Diet(orchestrator) = app.mounted_mut() {
                orchestrator.set_input(DietInput {
                    food_item: food,
                    meal_type,
                });
            }
            Outcome::from_view(app.submit_active().await)
        }

        Commands::MealPlan => {
            app.navigate(View::MealPlan);
            Outcome::from_view(app.submit_active().await)
        }

        Commands::Recipe {
            ingredients,
            cuisine,
        } => {
            app.navigate(View::Recipe);
            if let MountedView::Recipe(orchestrator) = app.mounted_mut() {
                orchestrator.set_input(RecipeInput {
                    ingredients,
                    cuisine,
                });
            }
            Outcome::from_view(app.submit_active().await)
        }

        Commands::Ping => {
            let status = app.api().health_check().await?;
            Ok(Outcome::ok(json!({ "status": status })))
        }
    }
}

/// Loads config, sets up logging and runs the parsed command.
pub async fn run(cli: Cli) -> CliResult<Outcome> {
    let config = Config::load()?;
    config.validate()?;

    let level = if cli.verbose {
        nutri_config::LogLevel(log::LevelFilter::Debug)
    } else {
        config.logging.level
    };
    crate::logger::initialize(level, config.log_file_path()?, config.logging.colored)?;
    config.log_summary();

    let mut app = open_app(&config, cli.server.as_deref())?;
    execute(&mut app, cli.command).await
}

fn profile_json(app: &NutritionApp) -> CliResult<Value> {
    let profile = app.profile();
    Ok(json!({
        "profile": serde_json::to_value(&profile)?,
        "normalized": serde_json::to_value(profile.normalize())?,
        "isAuthenticated": app.session().is_authenticated(),
    }))
}
