//! # BMI CLI Application
//!
//! Terminal front end for the BMI calculation engine. Prompts for weight
//! and height, runs the validate-calculate-categorize chain, and prints a
//! formatted report plus the result as JSON.
//!
//! Enter a blank weight to quit.

use std::io::{self, BufRead, Write};

use bmi_core::category::BmiCategory;
use bmi_core::form::BmiForm;

fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn band_label(category: BmiCategory) -> String {
    match category.band() {
        (None, Some(upper)) => format!("< {}", upper),
        (Some(lower), Some(upper)) => format!("{} - {}", lower, upper),
        (Some(lower), None) => format!(">= {}", lower),
        (None, None) => unreachable!("every category is bounded on at least one side"),
    }
}

fn main() {
    println!("BMI Calculator");
    println!("==============");
    println!();

    let mut form = BmiForm::new();

    loop {
        let Some(weight) = prompt("Enter weight (kg), blank to quit: ") else {
            break;
        };
        if weight.is_empty() {
            break;
        }
        let Some(height) = prompt("Enter height (cm): ") else {
            break;
        };

        form.set_weight(weight);
        form.set_height(height);

        match form.submit() {
            Ok(result) => {
                println!();
                println!("═══════════════════════════════════════");
                println!("  BMI RESULT");
                println!("═══════════════════════════════════════");
                println!();
                println!("Input:");
                println!("  Weight:  {} kg", form.weight());
                println!("  Height:  {} cm", form.height());
                println!();
                println!("Result:");
                println!("  BMI:      {:.2}", result.value);
                println!("  Category: {}", result.category);
                println!();
                println!("WHO bands:");
                for category in BmiCategory::ALL {
                    let marker = if category == result.category { ">" } else { " " };
                    println!(
                        "  {} {:<14} {}",
                        marker,
                        category.display_name(),
                        band_label(category)
                    );
                }

                println!();
                println!("JSON Output (for LLM/API use):");
                if let Ok(json) = serde_json::to_string_pretty(&result) {
                    println!("{}", json);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e.user_message());
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_labels() {
        assert_eq!(band_label(BmiCategory::Underweight), "< 18.5");
        assert_eq!(band_label(BmiCategory::NormalWeight), "18.5 - 25");
        assert_eq!(band_label(BmiCategory::Overweight), "25 - 30");
        assert_eq!(band_label(BmiCategory::Obesity), ">= 30");
    }
}
