use crate::profile_commands::{ProfileArgs, ProfileCommands};

use nutri_core::MealType;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account with an initial profile and sign in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Forget the saved session
    Logout,

    /// Show the current session
    Whoami,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// BMI and daily calorie analysis
    Health,

    /// Log a food item and get advice for the rest of the day
    Diet {
        /// What was eaten
        #[arg(long)]
        food: String,
        /// Breakfast, Lunch, Dinner or Snack
        #[arg(long, default_value = "Lunch")]
        meal_type: MealType,
    },

    /// Generate a meal plan for the day
    MealPlan,

    /// Generate a recipe from ingredients
    Recipe {
        /// Comma separated ingredients
        #[arg(long)]
        ingredients: String,
        /// Cuisine (defaults to any)
        #[arg(long, default_value = "")]
        cuisine: String,
    },

    /// Check that the backend is reachable
    Ping,
}
