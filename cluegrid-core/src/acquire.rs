use crate::{
    board::{Board, CLUE_ROWS, Clue, Column},
    error::AcquisitionError,
    service::{CategoryRecord, ClueRecord, TriviaProvider},
};
use rand::{Rng, seq::SliceRandom};

/// How many candidate categories to request per acquisition.
pub const CATEGORY_POOL_SIZE: usize = 100;

/// Offset range for the categories query, so repeated games draw from
/// different pools.
pub const MAX_CATEGORY_OFFSET: usize = 10_000;

/// Assemble a fresh game dataset: sample `category_count` distinct
/// categories that each have at least [`CLUE_ROWS`] clues, then exactly
/// [`CLUE_ROWS`] distinct clues per category, all starting hidden.
///
/// Fails rather than returning a short dataset; callers must never render
/// a partial board.
pub fn acquire_game(
    provider: &dyn TriviaProvider,
    category_count: usize,
) -> Result<Board, AcquisitionError> {
    acquire_game_with_rng(provider, category_count, &mut rand::thread_rng())
}

pub fn acquire_game_with_rng<R: Rng>(
    provider: &dyn TriviaProvider,
    category_count: usize,
    rng: &mut R,
) -> Result<Board, AcquisitionError> {
    let offset = rng.gen_range(0..MAX_CATEGORY_OFFSET);
    let pool = provider.fetch_categories(CATEGORY_POOL_SIZE, offset)?;
    let pool_size = pool.len();

    let qualifying: Vec<CategoryRecord> = pool
        .into_iter()
        .filter(|category| category.clues_count >= CLUE_ROWS)
        .collect();
    log::debug!(
        "category pool at offset {offset}: {} fetched, {} with >= {CLUE_ROWS} clues",
        pool_size,
        qualifying.len()
    );
    if qualifying.len() < category_count {
        return Err(AcquisitionError::NotEnoughCategories {
            wanted: category_count,
            got: qualifying.len(),
        });
    }

    let selected: Vec<CategoryRecord> = qualifying
        .choose_multiple(rng, category_count)
        .cloned()
        .collect();

    // Clue fetches run one category at a time; the board preserves this order.
    let mut columns = Vec::with_capacity(category_count);
    for category in selected {
        let records = provider.fetch_clues(category.id)?;
        let mut usable: Vec<(String, String)> = records
            .into_iter()
            .filter_map(ClueRecord::into_parts)
            .collect();
        if usable.len() < CLUE_ROWS {
            return Err(AcquisitionError::NotEnoughClues {
                category: category.title,
                got: usable.len(),
            });
        }
        if usable.len() > CLUE_ROWS {
            usable = usable.choose_multiple(rng, CLUE_ROWS).cloned().collect();
        }
        let clues = usable
            .into_iter()
            .map(|(question, answer)| Clue::new(question, answer))
            .collect();
        columns.push(Column {
            title: category.title,
            clues,
        });
    }

    log::info!("acquired board with {category_count} categories");
    Ok(Board::new(columns))
}
