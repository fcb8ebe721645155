use nom::{
    combinator::map,
    error::{Error, ErrorKind},
    number::complete::{le_i16, le_u8},
    IResult as _IResult, Parser,
};

use crate::{FrameRect, SpriteOffset, SpriteSize};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

/// One sprite record straight from the file. The name still borrows the input.
#[derive(Debug, PartialEq, Eq)]
pub struct RawSprite<'a> {
    pub name: &'a [u8],
    pub frame: FrameRect,
    pub offset: SpriteOffset,
    pub size: SpriteSize,
    pub rotated: bool,
}

/// `trim_enabled`, `rotate_enabled`, `string_encoding`
pub fn parse_flags(i: &'_ [u8]) -> IResult<'_, (u8, u8, u8)> {
    (le_u8, le_u8, le_u8).parse(i)
}

/// Null-terminated string of at most `limit` bytes, terminator included.
///
/// Fails with [`ErrorKind::Eof`] when input ends first and [`ErrorKind::TooLarge`] when
/// `limit` bytes pass without a terminator. The terminator is consumed but not returned.
pub fn parse_name(i: &'_ [u8], limit: usize) -> IResult<'_, &'_ [u8]> {
    let window = &i[..i.len().min(limit)];

    match window.iter().position(|&c| c == 0) {
        Some(end) => Ok((&i[end + 1..], &i[..end])),
        None if i.len() >= limit => Err(nom::Err::Failure(Error::new(i, ErrorKind::TooLarge))),
        None => Err(nom::Err::Failure(Error::new(i, ErrorKind::Eof))),
    }
}

pub fn parse_placement(i: &'_ [u8]) -> IResult<'_, (FrameRect, SpriteOffset, SpriteSize, bool)> {
    map(
        (
            le_i16, le_i16, le_i16, le_i16, le_i16, le_i16, le_i16, le_i16, le_u8,
        ),
        |(
            frame_x,
            frame_y,
            frame_width,
            frame_height,
            offset_x,
            offset_y,
            width,
            height,
            rotated,
        )| {
            (
                FrameRect {
                    x: frame_x,
                    y: frame_y,
                    width: frame_width,
                    height: frame_height,
                },
                SpriteOffset {
                    x: offset_x,
                    y: offset_y,
                },
                SpriteSize { width, height },
                rotated != 0,
            )
        },
    )
    .parse(i)
}

pub fn parse_sprite(i: &'_ [u8], name_limit: usize) -> IResult<'_, RawSprite<'_>> {
    let (i, name) = parse_name(i, name_limit)?;
    let (i, (frame, offset, size, rotated)) = parse_placement(i)?;

    Ok((
        i,
        RawSprite {
            name,
            frame,
            offset,
            size,
            rotated,
        },
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags() {
        let (rest, flags) = parse_flags(&[1, 2, 0, 9]).unwrap();

        assert_eq!(flags, (1, 2, 0));
        assert_eq!(rest, [9]);
    }

    #[test]
    fn flags_short() {
        assert!(parse_flags(&[1, 1]).is_err());
    }

    #[test]
    fn name_stops_at_terminator() {
        let (rest, name) = parse_name(b"abc\0def", 8).unwrap();

        assert_eq!(name, b"abc");
        assert_eq!(rest, b"def");
    }

    #[test]
    fn name_empty() {
        let (rest, name) = parse_name(b"\0x", 8).unwrap();

        assert!(name.is_empty());
        assert_eq!(rest, b"x");
    }

    #[test]
    fn name_fills_limit_exactly() {
        // 4 characters + terminator = 5 bytes
        let (rest, name) = parse_name(b"abcd\0", 5).unwrap();

        assert_eq!(name, b"abcd");
        assert!(rest.is_empty());
    }

    #[test]
    fn name_over_limit() {
        let Err(nom::Err::Failure(err)) = parse_name(b"abcde\0", 5) else {
            panic!("expected failure");
        };

        assert_eq!(err.code, ErrorKind::TooLarge);
    }

    #[test]
    fn name_runs_out() {
        let Err(nom::Err::Failure(err)) = parse_name(b"abc", 5) else {
            panic!("expected failure");
        };

        assert_eq!(err.code, ErrorKind::Eof);
    }

    #[test]
    fn sprite() {
        let mut bytes = b"hero\0".to_vec();
        for v in [1i16, 2, 30, 40, -3, -4, 36, 48] {
            bytes.extend(v.to_le_bytes());
        }
        bytes.push(1);

        let (rest, sprite) = parse_sprite(&bytes, 128).unwrap();

        assert!(rest.is_empty());
        assert_eq!(sprite.name, b"hero");
        assert_eq!(
            sprite.frame,
            FrameRect {
                x: 1,
                y: 2,
                width: 30,
                height: 40
            }
        );
        assert_eq!(sprite.offset, SpriteOffset { x: -3, y: -4 });
        assert_eq!(
            sprite.size,
            SpriteSize {
                width: 36,
                height: 48
            }
        );
        assert!(sprite.rotated);
    }

    #[test]
    fn sprite_missing_rotated() {
        let mut bytes = b"hero\0".to_vec();
        bytes.extend([0u8; 16]);

        assert!(parse_sprite(&bytes, 128).is_err());
    }
}
