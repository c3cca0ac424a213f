use serde::{Deserialize, Serialize};

use doha_domain::{Couplet, Loose, loose};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSize {
	/// Every matching record on one page (`perPage=-1`).
	All,
	Limit(usize),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
	pub couplets: Vec<Couplet>,
	pub total: usize,
	pub total_pages: usize,
	pub page: usize,
	pub per_page: usize,
	pub pagination: bool,
}

/// Page number from a loose value: anything missing, non-numeric or below 1 becomes 1.
pub fn page_number(raw: Option<&Loose>) -> usize {
	raw.and_then(loose::to_int).filter(|page| *page >= 1).map(|page| page as usize).unwrap_or(1)
}

/// Page size from a loose value: `-1` means all, positive numbers are kept, anything else
/// falls back to [`DEFAULT_PAGE_SIZE`].
pub fn page_size(raw: Option<&Loose>) -> PageSize {
	match raw.and_then(loose::to_int) {
		Some(-1) => PageSize::All,
		Some(size) if size > 0 => PageSize::Limit(size as usize),
		_ => PageSize::Limit(DEFAULT_PAGE_SIZE),
	}
}

/// Cuts one page out of the ordered records.
///
/// With pagination disabled every record is returned, `total` is the number returned and
/// `total_pages` is 1. A page past the end yields no records but keeps the real totals.
pub fn paginate(
	couplets: Vec<&Couplet>,
	page: usize,
	per_page: PageSize,
	enabled: bool,
) -> ResultPage {
	let page = page.max(1);
	let total = couplets.len();
	let size = match per_page {
		PageSize::All => total,
		PageSize::Limit(size) => size,
	};

	if !enabled {
		let couplets: Vec<Couplet> = couplets.into_iter().cloned().collect();

		return ResultPage {
			total: couplets.len(),
			couplets,
			total_pages: 1,
			page,
			per_page: size,
			pagination: false,
		};
	}

	let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };
	let start = (page - 1).saturating_mul(size);
	let couplets = couplets.into_iter().skip(start).take(size).cloned().collect();

	ResultPage { couplets, total, total_pages, page, per_page: size, pagination: true }
}
