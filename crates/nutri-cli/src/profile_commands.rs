use nutri_core::{ActivityLevel, Gender, HealthGoal, NumericInput, ProfilePatch};

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the current profile and what would be sent to the backend
    Show,
    /// Edit and save the profile
    Set {
        #[command(flatten)]
        fields: ProfileArgs,

        /// Also push the saved profile to the backend (requires login)
        #[arg(long)]
        sync: bool,
    },
}

/// Profile fields; anything omitted keeps its current value.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Weight in kg (empty string clears it)
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in cm (empty string clears it)
    #[arg(long)]
    pub height: Option<String>,

    /// Age in years (empty string clears it)
    #[arg(long)]
    pub age: Option<String>,

    /// M or F
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Sedentary, Moderate or Active
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Balanced, "Lose Weight" or "Gain Muscle"
    #[arg(long)]
    pub goal: Option<HealthGoal>,

    /// Free text, e.g. "Vegetarian"
    #[arg(long)]
    pub restrictions: Option<String>,
}

impl ProfileArgs {
    pub fn to_patch(&self) -> ProfilePatch {
        ProfilePatch {
            weight_kg: self.weight.as_deref().map(NumericInput::from),
            height_cm: self.height.as_deref().map(NumericInput::from),
            age: self.age.as_deref().map(NumericInput::from),
            gender: self.gender,
            activity_level: self.activity,
            health_goals: self.goal,
            dietary_restrictions: self.restrictions.clone(),
        }
    }
}
