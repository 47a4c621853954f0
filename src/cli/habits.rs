use crate::cli::commands::{GlobalArgs, HabitsArgs};
use crate::cli::context;
use crate::errors::SmartdoError;
use crate::tasks::{load_user_habits, save_user_habits};

pub async fn handle_habits(args: HabitsArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;
    if let Some(habits) = args.set {
        save_user_habits(state.settings.as_ref(), &habits)?;
        println!("Saved habits.");
    } else {
        println!("{}", load_user_habits(state.settings.as_ref())?);
    }
    Ok(())
}
