//! Grid layout and aggregate figures for campus pages.

use campus_data::{CampusRecord, ContentTree};

/// Split an offer list into display rows.
///
/// Up to three items share one row; longer lists are split in two, with the
/// extra item of an odd count going to the first row.
pub fn split_rows<T>(items: &[T]) -> Vec<&[T]> {
    if items.len() <= 3 {
        return vec![items];
    }
    let (top, bottom) = items.split_at(items.len().div_ceil(2));
    vec![top, bottom]
}

/// Graduate and program counts shown in the alumni banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlumniTotals {
    pub graduates: u64,
    pub careers: usize,
}

impl AlumniTotals {
    pub fn for_campus(record: &CampusRecord) -> Self {
        Self {
            graduates: record.alumni.as_ref().map_or(0, |a| u64::from(a.graduados)),
            careers: record.offer.len(),
        }
    }

    /// Totals across every campus (the network-wide "general" figures).
    pub fn for_network(tree: &ContentTree) -> Self {
        tree.iter()
            .map(|(_, record)| Self::for_campus(record))
            .fold(Self::default(), |acc, t| Self {
                graduates: acc.graduates + t.graduates,
                careers: acc.careers + t.careers,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_data::{AlumniStats, OfferCard};

    #[test]
    fn short_lists_stay_on_one_row() {
        let empty: [u8; 0] = [];
        assert_eq!(split_rows(&empty), vec![&empty[..]]);
        assert_eq!(split_rows(&[1, 2, 3]), vec![&[1, 2, 3][..]]);
    }

    #[test]
    fn even_lists_split_in_half() {
        assert_eq!(split_rows(&[1, 2, 3, 4]), vec![&[1, 2][..], &[3, 4][..]]);
        assert_eq!(split_rows(&[1, 2, 3, 4, 5, 6]), vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn odd_lists_put_the_extra_item_on_top() {
        assert_eq!(split_rows(&[1, 2, 3, 4, 5]), vec![&[1, 2, 3][..], &[4, 5][..]]);
        assert_eq!(split_rows(&[1, 2, 3, 4, 5, 6, 7]), vec![&[1, 2, 3, 4][..], &[5, 6, 7][..]]);
    }

    fn campus(graduados: u32, offers: usize) -> CampusRecord {
        CampusRecord {
            alumni: Some(AlumniStats {
                graduados,
                descripcion: String::new(),
            }),
            offer: (0..offers)
                .map(|i| OfferCard {
                    title: format!("Carrera {i}"),
                    imagen: None,
                })
                .collect(),
            ..CampusRecord::default()
        }
    }

    #[test]
    fn network_totals_sum_every_campus() {
        let mut tree = ContentTree::default();
        tree.campuses.insert("Santa Cruz".into(), campus(1200, 4));
        tree.campuses.insert("Cobija".into(), campus(300, 2));
        tree.campuses.insert("Trinidad".into(), CampusRecord::default());

        assert_eq!(
            AlumniTotals::for_network(&tree),
            AlumniTotals {
                graduates: 1500,
                careers: 6
            }
        );
        assert_eq!(AlumniTotals::for_campus(&tree.campuses["Trinidad"]), AlumniTotals::default());
    }
}
