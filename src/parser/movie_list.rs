// Award list parsing: `year;title;studios;producers;winner`
use crate::model::{Movie, ParserError};

pub trait Parser {
    fn parse(&self, content: &str) -> Result<Vec<Movie>, ParserError>;
}

pub struct MovieListParser;

impl MovieListParser {
    pub const DELIMITER: char = ';';

    pub fn new() -> Self {
        Self
    }

    fn parse_line(line_no: usize, line: &str) -> Result<Movie, ParserError> {
        let mut fields = line.split(Self::DELIMITER);
        let mut next = |field: &'static str| {
            fields
                .next()
                .map(str::trim)
                .ok_or(ParserError::MissingField { line: line_no, field })
        };

        let raw_year = next("year")?;
        let title = next("title")?.to_string();
        let studios = next("studios")?.to_string();
        let producers = next("producers")?.to_string();
        // Non-winning lines often end without the last column.
        let winner = next("winner").map_or(false, |w| w.eq_ignore_ascii_case("yes"));

        let year = raw_year.parse::<i32>().map_err(|_| ParserError::InvalidYear {
            line: line_no,
            value: raw_year.to_string(),
        })?;

        Ok(Movie {
            year,
            title,
            studios,
            producers,
            winner,
        })
    }

    fn is_header(line: &str) -> bool {
        line.split(Self::DELIMITER)
            .next()
            .is_some_and(|first| first.trim().eq_ignore_ascii_case("year"))
    }
}

impl Parser for MovieListParser {
    fn parse(&self, content: &str) -> Result<Vec<Movie>, ParserError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut movies = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() || (idx == 0 && Self::is_header(line)) {
                continue;
            }
            movies.push(Self::parse_line(idx + 1, line)?);
        }

        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "year;title;studios;producers;winner\n\
        1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes\n\
        1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;\n\
        \n\
        1981;Mommie Dearest;Paramount Pictures;Frank Yablans;YES\n";

    #[test]
    fn parses_rows_and_skips_header_and_blank_lines() {
        let movies = MovieListParser::new().parse(SAMPLE).unwrap();

        assert_eq!(movies.len(), 3);
        assert_eq!(
            movies[0],
            Movie {
                year: 1980,
                title: "Can't Stop the Music".into(),
                studios: "Associated Film Distribution".into(),
                producers: "Allan Carr".into(),
                winner: true,
            }
        );
        assert!(!movies[1].winner);
        assert_eq!(movies[1].studios, "Lorimar Productions, United Artists");
        assert!(movies[2].winner);
    }

    #[test]
    fn accepts_missing_winner_column() {
        let movies = MovieListParser::new()
            .parse("1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek")
            .unwrap();

        assert_eq!(movies.len(), 1);
        assert!(!movies[0].winner);
        assert_eq!(movies[0].producers, "Bo Derek");
    }

    #[test]
    fn handles_bom_and_crlf() {
        let content = "\u{feff}year;title;studios;producers;winner\r\n2001;Freddy Got Fingered;20th Century Fox;Larry Brezner, Howard Lapides;yes\r\n";
        let movies = MovieListParser::new().parse(content).unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].year, 2001);
        assert_eq!(movies[0].producers, "Larry Brezner, Howard Lapides");
        assert!(movies[0].winner);
    }

    #[test]
    fn rejects_non_numeric_year() {
        let err = MovieListParser::new()
            .parse("year;title;studios;producers;winner\nabc;Title;Studio;Someone;yes\n")
            .unwrap_err();

        assert_eq!(
            err,
            ParserError::InvalidYear {
                line: 2,
                value: "abc".into()
            }
        );
    }

    #[test]
    fn rejects_truncated_line() {
        let err = MovieListParser::new()
            .parse("1984;Bolero;Cannon Films")
            .unwrap_err();

        assert_eq!(
            err,
            ParserError::MissingField {
                line: 1,
                field: "producers"
            }
        );
    }

    #[test]
    fn header_is_only_skipped_on_first_line() {
        let err = MovieListParser::new()
            .parse("1984;Bolero;Cannon Films;Bo Derek;yes\nyear;title;studios;producers;winner\n")
            .unwrap_err();

        assert!(matches!(err, ParserError::InvalidYear { line: 2, .. }));
    }
}
