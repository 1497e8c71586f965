use crate::frame::Field;
use crate::frame::FieldValues;
use crate::frame::Frame;
use chrono::NaiveDateTime;

/// Trims the frame to rows whose time axis falls inside the requested
/// window (inclusive start, exclusive end). The first Time typed field is
/// the axis; rows whose axis value is null fall outside every window.
/// Frames without a time column, or calls without any bound, pass
/// through untouched.
pub(crate) fn filter_frame(
    frame: Frame,
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
) -> Frame {
    if from.is_none() && to.is_none() {
        return frame;
    }
    let keep: Option<Vec<bool>> = frame
        .fields
        .iter()
        .find_map(|field| match &field.values {
            FieldValues::Time(slots) => Some(slots),
            _ => None,
        })
        .map(|axis| {
            axis.iter()
                .map(|slot| match slot {
                    Some(at) => {
                        from.map_or(true, |from| *at >= from) && to.map_or(true, |to| *at < to)
                    }
                    None => false,
                })
                .collect()
        });
    let Some(keep) = keep else {
        return frame;
    };
    if keep.iter().all(|keep| *keep) {
        return frame;
    }
    let Frame {
        ref_id,
        fields,
        meta,
    } = frame;
    let fields = fields
        .into_iter()
        .map(|field| Field {
            name: field.name,
            unit: field.unit,
            values: retain(field.values, &keep),
        })
        .collect();
    Frame {
        ref_id,
        fields,
        meta,
    }
}

/// Keeps the slots whose flag is set, preserving order.
fn retain(values: FieldValues, keep: &[bool]) -> FieldValues {
    fn sift<T>(slots: Vec<T>, keep: &[bool]) -> Vec<T> {
        slots
            .into_iter()
            .zip(keep)
            .filter(|(_, keep)| **keep)
            .map(|(slot, _)| slot)
            .collect()
    }
    match values {
        FieldValues::Time(slots) => FieldValues::Time(sift(slots, keep)),
        FieldValues::Number(slots) => FieldValues::Number(sift(slots, keep)),
        FieldValues::String(slots) => FieldValues::String(sift(slots, keep)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameMeta;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn frame() -> Frame {
        Frame {
            ref_id: "A".to_owned(),
            fields: vec![
                Field {
                    name: "Time".to_owned(),
                    unit: None,
                    values: FieldValues::Time(vec![Some(at(1)), Some(at(5)), None, Some(at(9))]),
                },
                Field {
                    name: "Value".to_owned(),
                    unit: None,
                    values: FieldValues::Number(vec![Some(1.0), Some(5.0), Some(7.0), Some(9.0)]),
                },
            ],
            meta: FrameMeta::default(),
        }
    }

    #[test]
    fn trims_every_column_by_the_time_axis() {
        let filtered = filter_frame(frame(), Some(at(2)), Some(at(9)));
        assert_eq!(filtered.row_count(), 1);
        assert_eq!(
            filtered.field("Time").unwrap().values,
            FieldValues::Time(vec![Some(at(5))])
        );
        assert_eq!(
            filtered.field("Value").unwrap().values,
            FieldValues::Number(vec![Some(5.0)])
        );
    }

    #[test]
    fn open_ended_bounds() {
        let filtered = filter_frame(frame(), Some(at(5)), None);
        assert_eq!(filtered.row_count(), 2);

        let filtered = filter_frame(frame(), None, Some(at(5)));
        assert_eq!(filtered.row_count(), 1);
    }

    #[test]
    fn no_window_passes_through() {
        let original = frame();
        let filtered = filter_frame(frame(), None, None);
        assert_eq!(filtered, original);
    }

    #[test]
    fn frame_without_time_column_passes_through() {
        let frame = Frame {
            ref_id: "A".to_owned(),
            fields: vec![Field {
                name: "Value".to_owned(),
                unit: None,
                values: FieldValues::Number(vec![Some(1.0)]),
            }],
            meta: FrameMeta::default(),
        };
        let filtered = filter_frame(frame.clone(), Some(at(1)), Some(at(9)));
        assert_eq!(filtered, frame);
    }
}
