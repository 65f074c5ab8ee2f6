use carlot::api::{CmdMessage, MessageLevel, VehicleListing};
use carlot::config::CarlotConfig;
use carlot::model::{Car, CarDealer, SessionDocument};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INDEX_WIDTH: usize = 5;
const PLATE_WIDTH: usize = 8;
const NAME_WIDTH: usize = 15;
const YEAR_WIDTH: usize = 6;
const RULE: &str = "-----------------------------------------------------------";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_listing(listing: &VehicleListing) {
    if listing.is_empty() {
        return;
    }

    println!();
    println!("{}", "================= AVAILABLE VEHICLES =================".yellow());
    print_car_table(&listing.available, "No available cars.");
    println!();
    println!("{}", "================== RENTED VEHICLES ==================".cyan());
    print_car_table(&listing.rented, "No rented cars.");
    println!();
}

fn print_car_table(cars: &[Car], empty_message: &str) {
    println!(
        "{}{}{}{}{}{}",
        fit("#", INDEX_WIDTH),
        fit("PLATE", PLATE_WIDTH),
        fit("BRAND", NAME_WIDTH),
        fit("MODEL", NAME_WIDTH),
        fit("YEAR", YEAR_WIDTH),
        "IN USE"
    );
    println!("{}", RULE);

    if cars.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }

    for (i, car) in cars.iter().enumerate() {
        println!("{}", car_row(i + 1, car));
    }
}

fn car_row(position: usize, car: &Car) -> String {
    format!(
        "{}{}{}{}{}{}",
        fit(&position.to_string(), INDEX_WIDTH),
        fit(&car.plate, PLATE_WIDTH),
        fit(&car.brand, NAME_WIDTH),
        fit(&car.model, NAME_WIDTH),
        fit(&car.year, YEAR_WIDTH),
        if car.is_in_use { "Yes" } else { "No" }
    )
}

pub(super) fn print_car_details(car: &Car, recent_users: &[String]) {
    println!();
    println!("{}", "================= VEHICLE INFO =================".yellow());
    println!("{:<15} {}", "Plate:", car.plate);
    println!("{:<15} {}", "Brand:", car.brand);
    println!("{:<15} {}", "Model:", car.model);
    println!("{:<15} {}", "Year:", car.year);
    println!("{:<15} {}", "Color:", car.color);
    println!("{:<15} {}", "VIN:", car.vin);
    println!("{:<15} {}", "In use:", if car.is_in_use { "Yes" } else { "No" });
    if let Some(user) = car.current_user.as_deref().filter(|_| car.is_in_use) {
        println!("{:<15} {}", "Current user:", user);
    }

    if recent_users.is_empty() {
        println!("\n{}", "No rental history available.".dimmed());
    } else {
        println!(
            "\n{}",
            format!("Last {} users who rented this car:", recent_users.len()).cyan()
        );
        for user in recent_users {
            println!("   - {}", user);
        }
    }
    println!("{}", "=================================================".yellow());
}

pub(super) fn print_status(session: Option<&SessionDocument>, dealer: Option<&CarDealer>) {
    let Some(session) = session else {
        return;
    };
    let name = dealer.map(|d| d.name.as_str()).unwrap_or("Not found");
    let presence = if session.presence { "Enabled" } else { "Disabled" };
    println!("Logged in as {}", name.bold());
    println!("Session presence: {}", presence);
}

pub(super) fn print_config(config: &CarlotConfig) {
    for key in CarlotConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Pads `s` to `width` display columns, truncating with an ellipsis and
/// always leaving one column of gap.
fn fit(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = width.saturating_sub(1);

    if s.width() > limit {
        for c in s.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width + 1 > limit {
                result.push('…');
                current_width += 1;
                break;
            }
            result.push(c);
            current_width += char_width;
        }
    } else {
        result.push_str(s);
        current_width = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_short_values() {
        assert_eq!(fit("ABC", 6), "ABC   ");
        assert_eq!(fit("", 3), "   ");
    }

    #[test]
    fn fit_truncates_long_values_keeping_a_gap() {
        let out = fit("MERCEDES-BENZ TRUCKS", 10);
        assert_eq!(out, "MERCEDES… ");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn fit_counts_wide_characters() {
        let out = fit("日本車両", 6);
        assert_eq!(out.width(), 6);
        assert!(out.contains('…'));
    }

    #[test]
    fn row_marks_rental_state() {
        let mut car = Car::new(
            "ABC-123".into(),
            "VIN".into(),
            "TOYOTA".into(),
            "COROLLA".into(),
            "2020".into(),
            "RED".into(),
        );
        assert!(car_row(1, &car).ends_with("No"));
        car.rent_to("9".into());
        let row = car_row(2, &car);
        assert!(row.starts_with("2    ABC-123 TOYOTA"));
        assert!(row.ends_with("Yes"));
    }
}
