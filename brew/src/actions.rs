//! Built-in beverage actions.
//!
//! | name          | requires | produces |
//! |---------------|----------|----------|
//! | `boil_water`  |          | water    |
//! | `brew_coffee` |          | coffee   |
//! | `add_sugar`   | coffee   | coffee   |
//! | `add_milk`    | coffee   | coffee   |
//! | `taste_test`  | coffee   |          |
//! | `enjoy`       | coffee   |          |
//!
//! Required fields are checked before the status line is emitted, so an
//! action that fails on a missing field prints nothing. The transcript of a
//! failed run therefore ends at the last action that succeeded.

use crate::core::context::{Context, Field};
use crate::core::error::MissingFieldError;
use crate::io::status::StatusSink;
use crate::registry::Action;

type ApplyResult = std::result::Result<Context, MissingFieldError>;

const COFFEE: &[Field] = &[Field::Coffee];
const WATER: &[Field] = &[Field::Water];

fn missing(action: &str, field: Field) -> MissingFieldError {
    MissingFieldError {
        action: action.to_string(),
        field,
    }
}

/// Sets `water` to `"hot"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoilWater;

impl Action for BoilWater {
    fn name(&self) -> &str {
        "boil_water"
    }

    fn description(&self) -> &str {
        "Boil the water"
    }

    fn produces(&self) -> &[Field] {
        WATER
    }

    fn apply(&self, mut ctx: Context, status: &mut dyn StatusSink) -> ApplyResult {
        status.emit("Boiling water...");
        ctx.water = Some("hot".to_string());
        Ok(ctx)
    }
}

/// Sets `coffee` to `"brewed"`, discarding anything already there.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrewCoffee;

impl Action for BrewCoffee {
    fn name(&self) -> &str {
        "brew_coffee"
    }

    fn description(&self) -> &str {
        "Brew the coffee"
    }

    fn produces(&self) -> &[Field] {
        COFFEE
    }

    fn apply(&self, mut ctx: Context, status: &mut dyn StatusSink) -> ApplyResult {
        status.emit("Brewing coffee...");
        ctx.coffee = Some("brewed".to_string());
        Ok(ctx)
    }
}

/// Appends an addition marker to an existing beverage.
fn append_to_coffee(
    action: &str,
    mut ctx: Context,
    status: &mut dyn StatusSink,
    line: &str,
    marker: &str,
) -> ApplyResult {
    let coffee = ctx
        .coffee
        .as_mut()
        .ok_or_else(|| missing(action, Field::Coffee))?;
    status.emit(line);
    coffee.push_str(" + ");
    coffee.push_str(marker);
    Ok(ctx)
}

/// Appends `" + sugar"` to `coffee`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddSugar;

impl Action for AddSugar {
    fn name(&self) -> &str {
        "add_sugar"
    }

    fn description(&self) -> &str {
        "Stir sugar into the coffee"
    }

    fn requires(&self) -> &[Field] {
        COFFEE
    }

    fn produces(&self) -> &[Field] {
        COFFEE
    }

    fn apply(&self, ctx: Context, status: &mut dyn StatusSink) -> ApplyResult {
        append_to_coffee(self.name(), ctx, status, "Adding sugar...", "sugar")
    }
}

/// Appends `" + milk"` to `coffee`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddMilk;

impl Action for AddMilk {
    fn name(&self) -> &str {
        "add_milk"
    }

    fn description(&self) -> &str {
        "Pour milk into the coffee"
    }

    fn requires(&self) -> &[Field] {
        COFFEE
    }

    fn produces(&self) -> &[Field] {
        COFFEE
    }

    fn apply(&self, ctx: Context, status: &mut dyn StatusSink) -> ApplyResult {
        append_to_coffee(self.name(), ctx, status, "Adding milk...", "milk")
    }
}

/// Reports the beverage without changing it.
fn report_coffee(
    action: &str,
    ctx: Context,
    status: &mut dyn StatusSink,
    label: &str,
) -> ApplyResult {
    let coffee = ctx.get(Field::Coffee).ok_or_else(|| missing(action, Field::Coffee))?;
    status.emit(&format!("{label}: {coffee}"));
    Ok(ctx)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TasteTest;

impl Action for TasteTest {
    fn name(&self) -> &str {
        "taste_test"
    }

    fn description(&self) -> &str {
        "Taste the coffee"
    }

    fn requires(&self) -> &[Field] {
        COFFEE
    }

    fn apply(&self, ctx: Context, status: &mut dyn StatusSink) -> ApplyResult {
        report_coffee(self.name(), ctx, status, "Tasting")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Enjoy;

impl Action for Enjoy {
    fn name(&self) -> &str {
        "enjoy"
    }

    fn description(&self) -> &str {
        "Serve and enjoy the coffee"
    }

    fn requires(&self) -> &[Field] {
        COFFEE
    }

    fn apply(&self, ctx: Context, status: &mut dyn StatusSink) -> ApplyResult {
        report_coffee(self.name(), ctx, status, "Enjoying")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::status::Transcript;

    #[test]
    fn boil_water_sets_water() {
        let mut transcript = Transcript::new();
        let ctx = BoilWater
            .apply(Context::default(), &mut transcript)
            .expect("apply");
        assert_eq!(ctx.water.as_deref(), Some("hot"));
        assert_eq!(transcript.lines(), &["Boiling water...".to_string()]);
    }

    #[test]
    fn brew_overwrites_existing_coffee() {
        let mut transcript = Transcript::new();
        let ctx = BrewCoffee
            .apply(Context::fresh(), &mut transcript)
            .expect("apply");
        assert_eq!(ctx.coffee.as_deref(), Some("brewed"));
    }

    #[test]
    fn additions_append_markers() {
        let mut transcript = Transcript::new();
        let ctx = BrewCoffee
            .apply(Context::default(), &mut transcript)
            .and_then(|ctx| AddSugar.apply(ctx, &mut transcript))
            .and_then(|ctx| AddMilk.apply(ctx, &mut transcript))
            .expect("apply");
        assert_eq!(ctx.coffee.as_deref(), Some("brewed + sugar + milk"));
        assert_eq!(
            transcript.lines(),
            &[
                "Brewing coffee...".to_string(),
                "Adding sugar...".to_string(),
                "Adding milk...".to_string(),
            ]
        );
    }

    #[test]
    fn addition_on_empty_but_present_coffee_appends() {
        let mut transcript = Transcript::new();
        let ctx = AddSugar
            .apply(Context::fresh(), &mut transcript)
            .expect("apply");
        assert_eq!(ctx.coffee.as_deref(), Some(" + sugar"));
    }

    #[test]
    fn missing_coffee_fails_without_status_line() {
        for action in [&AddSugar as &dyn Action, &AddMilk, &TasteTest, &Enjoy] {
            let mut transcript = Transcript::new();
            let err = action
                .apply(Context::default(), &mut transcript)
                .expect_err("missing field");
            assert_eq!(err.action, action.name());
            assert_eq!(err.field, Field::Coffee);
            assert!(transcript.is_empty());
        }
    }

    #[test]
    fn taste_and_enjoy_report_without_mutating() {
        let ctx = Context {
            water: None,
            coffee: Some("brewed + milk".to_string()),
        };
        let mut transcript = Transcript::new();
        let after = TasteTest
            .apply(ctx.clone(), &mut transcript)
            .and_then(|ctx| Enjoy.apply(ctx, &mut transcript))
            .expect("apply");
        assert_eq!(after, ctx);
        assert_eq!(
            transcript.lines(),
            &[
                "Tasting: brewed + milk".to_string(),
                "Enjoying: brewed + milk".to_string(),
            ]
        );
    }
}
