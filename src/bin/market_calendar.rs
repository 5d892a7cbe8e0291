/// Show the US market holiday calendar for a year
/// Usage: cargo run --bin market_calendar [YEAR]
use chrono::Utc;
use market_clock::presenter::format::DAYS_OF_WEEK;
use market_clock::time::{
    holidays_in_year, is_market_open, next_trading_day, MarketCalendar, REFERENCE_ZONE,
};

fn main() -> anyhow::Result<()> {
    let calendar = MarketCalendar::new();
    let now = Utc::now();
    let today = calendar.reference_time(now).date;

    let year = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<i32>()
            .map_err(|e| anyhow::anyhow!("invalid year '{}': {}", arg, e))?,
        None => today.year(),
    };

    println!("📅 US Market Holidays {}", year);
    println!("========================\n");

    let holidays = holidays_in_year(year);
    if holidays.is_empty() {
        println!("⚠️  No holidays could be computed for {}", year);
        return Ok(());
    }

    for (holiday, date) in &holidays {
        let weekday = DAYS_OF_WEEK[date.weekday() as usize];
        let note = if date.is_weekend() { "  (falls on a weekend, not observed)" } else { "" };
        println!("   {}  {:<9}  {}{}", date, weekday, holiday.name, note);
    }

    println!("\n🕒 Today in {}: {}", REFERENCE_ZONE, today);
    println!(
        "   Trading day: {}",
        if calendar.is_trading_day(today) { "yes" } else { "no" }
    );
    println!(
        "   Market now: {}",
        if is_market_open(now) { "open" } else { "closed" }
    );

    match next_trading_day(today) {
        Some(next) => println!(
            "   Next trading day: {} ({} day(s) away)",
            next,
            calendar.days_until_next_trading_day(today)
        ),
        None => println!("   Next trading day: none within lookahead"),
    }

    Ok(())
}
