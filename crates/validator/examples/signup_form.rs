//! Validates a sign-up form as the user fills it in.
//!
//! Run with `SKYMMA_LOG=skymma_validator=trace` to see each check.

use serde_json::json;
use skymma_validator::prelude::*;

fn signup_rules(check: &mut Check<'_>) -> Result<(), ValidateError> {
    check.field("username").required()?.min_length(4)?.max_length(12)?;
    check.field("email").required()?.email()?;

    let model = check.model();
    check.field("passwordConfirm").set_valid(
        "confirm",
        model["password"] == model["passwordConfirm"],
        Some("passwords do not match"),
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = skymma_log::init()?;

    add_validator("notAdmin", |ctx, _| {
        Ok(ctx.value.as_str().is_none_or(|name| !name.eq_ignore_ascii_case("admin")))
    });

    let mut form = Form::new(json!({
        "username": "",
        "email": "",
        "password": "",
        "passwordConfirm": "",
    }))
    .with_rules(|check| {
        signup_rules(check)?;
        check.field("username").invoke("notAdmin", &[])?;
        Ok(())
    });

    let steps = [
        ("username", "admin"),
        ("username", "  snabel "),
        ("email", "not an address"),
        ("email", "snabel@example.se"),
        ("password", "hunter2"),
        ("passwordConfirm", "hunter2"),
    ];

    for (field, value) in steps {
        form.set(field, value);
        let result = validate(&form)?;
        println!("{field} = {value:?}");
        println!("{}", serde_json::to_string_pretty(result.as_object())?);
    }

    let list = validate_as_list(&form, None)?;
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
