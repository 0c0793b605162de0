use chrono::NaiveDate;

use crate::{GameSession, Status};

/// Marker used for a channel status in shared results.
#[must_use]
pub const fn status_marker(status: Status) -> &'static str {
    match status {
        Status::Correct => "🟩",
        Status::Present => "🟨",
        Status::Absent => "⬛",
    }
}

/// Builds the spoiler-free summary of a game.
///
/// ```text
/// Donkdle 3/14/2025 🎉
/// 3/∞
///
/// ⬛🟨⬛🟨
/// 🟨🟨🟩🟨
/// 🟩🟩🟩🟩
/// ```
///
/// The second line shows the number of guesses when won, or `X` otherwise,
/// out of the guess limit (`∞` when unlimited). Each following line is one
/// guess, channels in region, kong, requirement, moves order.
#[must_use]
pub fn share_text(session: &GameSession, date: NaiveDate) -> String {
    let won = session.state().is_won();
    let emoji = if won { "🎉" } else { "😢" };
    let limit = session
        .max_guesses()
        .map_or_else(|| "∞".to_owned(), |max| max.to_string());
    let tries = if won {
        session.guesses().len().to_string()
    } else {
        "X".to_owned()
    };

    let mut text = format!(
        "Donkdle {} {emoji}\n{tries}/{limit}\n\n",
        date.format("%-m/%-d/%Y")
    );
    for guess in session.guesses() {
        for status in guess.feedback().statuses() {
            text.push_str(status_marker(status));
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, LocationId, LocationRecord};

    fn catalog() -> Catalog {
        let records = [
            (1, "Hillside Bunch", "Hillside", "Japes", "Donkey", vec!["Strong Kong"]),
            (2, "Lowlands Coin", "Lowlands", "Japes", "Diddy", vec![]),
            (3, "Igloo Pad", "Igloo", "Caves", "Any", vec!["Strong Kong", "Climbing"]),
        ];
        Catalog::from_records(records.into_iter().map(
            |(id, name, region, level, kong, moves)| LocationRecord {
                id: LocationId::Number(id),
                name: Some(name.to_owned()),
                hint_region: Some(region.to_owned()),
                level: Some(level.to_owned()),
                kong: Some(kong.to_owned()),
                moves: Some(moves.into_iter().map(ToOwned::to_owned).collect()),
            },
        ))
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    #[test]
    fn test_won_game() {
        let catalog = catalog();
        let mut session = GameSession::new(catalog.locations()[0].clone(), None);
        session.submit_guess(&catalog, "Lowlands Coin").unwrap();
        session.submit_guess(&catalog, "Igloo Pad").unwrap();
        session.submit_guess(&catalog, "Hillside Bunch").unwrap();

        let expected = "Donkdle 3/4/2025 🎉\n3/∞\n\n🟨⬛⬛⬛\n⬛🟨⬛🟨\n🟩🟩🟩🟩\n";
        assert_eq!(share_text(&session, date()), expected);
    }

    #[test]
    fn test_lost_game_with_limit() {
        let catalog = catalog();
        let mut session = GameSession::new(catalog.locations()[0].clone(), Some(1));
        session.submit_guess(&catalog, "Lowlands Coin").unwrap();
        assert!(session.state().is_lost());

        let text = share_text(&session, date());
        assert!(text.starts_with("Donkdle 3/4/2025 😢\nX/1\n\n"));
        assert_eq!(text.lines().count(), 4);
    }
}
