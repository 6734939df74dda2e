use tracing::debug;

use crate::{CodeUnit, Error, LineSource, RecNo};

/// Move `*cno` to the first non-blank column of line `lno` at or after `*cno`.
///
/// When the rest of the line is blank the column stops on the last character
/// instead of running past it. An empty line, or a start column at or past
/// the end of the line, yields column 0. An empty file is not an error and
/// also yields column 0.
///
/// `*cno` is 0 after any failure, so a caller that ignores the result still
/// has a valid column.
///
/// # Errors
///
/// [`Error::UpstreamFailure`] if `lines` cannot supply the line for any reason
/// other than the file being empty.
pub fn first_nonblank<S>(lines: &S, lno: RecNo, cno: &mut usize) -> Result<(), Error>
where
    S: LineSource + ?Sized,
{
    let off = *cno;
    *cno = 0;

    let line = match lines.fetch_line(lno) {
        Ok(line) => line,
        Err(e) if e.is_empty_file() => return Ok(()),
        Err(e) => {
            debug!(lno, error = %e, "line fetch failed");
            return Err(e.into());
        }
    };

    if off >= line.len() {
        return Ok(());
    }

    *cno = line[off..]
        .iter()
        .position(|u| !u.is_blank())
        .map_or(line.len() - 1, |n| off + n);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::first_nonblank;
    use crate::{Error, LineError, MemLines};

    #[test]
    fn stops_on_first_nonblank() {
        let lines = MemLines::from_bytes(b"  \t foo bar");
        let mut cno = 0;
        first_nonblank(&lines, 1, &mut cno).unwrap();
        assert_eq!(cno, 4);

        // Already on a non-blank.
        let mut cno = 5;
        first_nonblank(&lines, 1, &mut cno).unwrap();
        assert_eq!(cno, 5);

        let mut cno = 7;
        first_nonblank(&lines, 1, &mut cno).unwrap();
        assert_eq!(cno, 8);
    }

    #[test]
    fn all_blank_clamps_to_last_column() {
        let lines = MemLines::from_bytes(b"     ");
        let mut cno = 0;
        first_nonblank(&lines, 1, &mut cno).unwrap();
        assert_eq!(cno, 4);

        let lines = MemLines::from_text("ab \t");
        let mut cno = 2;
        first_nonblank(&lines, 1, &mut cno).unwrap();
        assert_eq!(cno, 3);
    }

    #[test]
    fn empty_line_and_past_end_yield_zero() {
        let lines = MemLines::from_bytes(b"\nabc");
        let mut cno = 3;
        first_nonblank(&lines, 1, &mut cno).unwrap();
        assert_eq!(cno, 0);

        let mut cno = 3;
        first_nonblank(&lines, 2, &mut cno).unwrap();
        assert_eq!(cno, 0);
    }

    #[test]
    fn empty_file_succeeds_with_zero() {
        let lines = MemLines::<u8>::new();
        let mut cno = 9;
        first_nonblank(&lines, 1, &mut cno).unwrap();
        assert_eq!(cno, 0);
    }

    #[test]
    fn missing_line_fails_with_zero() {
        let lines = MemLines::from_bytes(b"x");
        let mut cno = 9;
        let err = first_nonblank(&lines, 5, &mut cno).unwrap_err();
        assert_eq!(err, Error::UpstreamFailure(LineError::NotFound(5)));
        assert_eq!(cno, 0);
    }
}
