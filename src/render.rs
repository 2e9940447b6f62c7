//! Movie caption rendering
//!
//! Turns a [`MovieDetail`] into the HTML caption sent to the user.
//! All interpolated text is escaped for Telegram's HTML parse mode.

use crate::tmdb::MovieDetail;
use html_escape::encode_text;
use std::fmt::Write;

/// Formats a dollar amount as `$1,234,567.00`.
///
/// # Examples
///
/// ```
/// use movie_info_bot::render::format_usd;
/// assert_eq!(format_usd(63_000_000), "$63,000,000.00");
/// ```
#[must_use]
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}.00")
}

/// Renders the caption for a movie card.
///
/// Empty companies, genres, tagline and overview are left out entirely
/// rather than producing blank HTML tags.
#[must_use]
pub fn movie_caption(movie: &MovieDetail) -> String {
    let mut caption = String::new();

    // write! into a String cannot fail
    let _ = write!(caption, "<b>{}</b>\n\n", encode_text(&movie.title));
    let _ = writeln!(caption, "Budget: {}", format_usd(movie.budget));
    let _ = writeln!(caption, "Revenue: {}", format_usd(movie.revenue));
    let _ = write!(
        caption,
        "Release Date: {}\n\n",
        encode_text(&movie.release_date)
    );

    let companies = movie
        .production_companies
        .iter()
        .map(|company| company.name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if !companies.is_empty() {
        let _ = write!(caption, "{}\n\n", encode_text(&companies));
    }

    let genres = movie
        .genres
        .iter()
        .map(|genre| genre.name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !genres.is_empty() {
        let _ = write!(caption, "<b>{}</b>\n\n", encode_text(&genres));
    }

    let _ = write!(
        caption,
        "Average vote: ⭐️ {} ⭐️\n\n",
        movie.vote_average
    );

    if !movie.tagline.trim().is_empty() {
        let _ = writeln!(caption, "{}", encode_text(movie.tagline.trim()));
    }
    if !movie.overview.trim().is_empty() {
        let _ = writeln!(caption, "<i>{}</i>", encode_text(movie.overview.trim()));
    }

    caption
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::{Company, Genre};

    fn fixture() -> MovieDetail {
        serde_json::from_str(include_str!("../tests/fixtures/movie_550.json"))
            .expect("fixture must parse")
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(999), "$999.00");
        assert_eq!(format_usd(1000), "$1,000.00");
        assert_eq!(format_usd(100_853_753), "$100,853,753.00");
        assert_eq!(format_usd(1_234_567_890), "$1,234,567,890.00");
    }

    #[test]
    fn test_caption_matches_fixture() {
        let expected = "<b>Fight Club</b>\n\n\
            Budget: $63,000,000.00\n\
            Revenue: $100,853,753.00\n\
            Release Date: 1999-10-15\n\n\
            Regency Enterprises, Fox 2000 Pictures, Atman Entertainment\n\n\
            <b>Drama Thriller Comedy</b>\n\n\
            Average vote: ⭐️ 8.433 ⭐️\n\n\
            Mischief. Mayhem. Soap.\n\
            <i>A ticking-time-bomb insomniac and a slippery soap salesman channel primal male \
            aggression into a shocking new form of therapy.</i>\n";

        assert_eq!(movie_caption(&fixture()), expected);
    }

    #[test]
    fn test_caption_escapes_html() {
        let mut movie = fixture();
        movie.title = "Tom & Jerry <3".to_string();
        movie.production_companies = vec![Company {
            name: "<script>".to_string(),
        }];

        let caption = movie_caption(&movie);
        assert!(caption.starts_with("<b>Tom &amp; Jerry &lt;3</b>\n\n"));
        assert!(caption.contains("&lt;script&gt;\n\n"));
        assert!(!caption.contains("<script>"));
    }

    #[test]
    fn test_caption_omits_empty_blocks() {
        let mut movie = fixture();
        movie.production_companies.clear();
        movie.genres = vec![Genre {
            name: "  ".to_string(),
        }];
        movie.tagline.clear();
        movie.overview.clear();
        movie.vote_average = serde_json::Number::from(0);

        let expected = "<b>Fight Club</b>\n\n\
            Budget: $63,000,000.00\n\
            Revenue: $100,853,753.00\n\
            Release Date: 1999-10-15\n\n\
            Average vote: ⭐️ 0 ⭐️\n\n";
        assert_eq!(movie_caption(&movie), expected);
    }

    #[test]
    fn test_vote_average_printed_as_sent() -> Result<(), serde_json::Error> {
        for (raw, shown) in [("7.0", "7.0"), ("8", "8"), ("6.25", "6.25")] {
            let movie: MovieDetail = serde_json::from_str(&format!(
                r#"{{"original_title": "X", "vote_average": {raw}}}"#
            ))?;
            assert!(
                movie_caption(&movie).contains(&format!("Average vote: ⭐️ {shown} ⭐️\n\n")),
                "vote_average {raw}"
            );
        }
        Ok(())
    }
}
