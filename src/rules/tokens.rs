//! Anti-monopoly tokens.
//!
//! A token for a company goes to the player who strictly leads that
//! company's shares. The holder may not pick that company up from the market
//! but is exempt from paying for (and raising the price of) its market cards
//! when drawing from the deck.
//!
//! Eligibility is judged against the best count among the *other* players,
//! so a tie never moves the token to the newcomer and always costs the
//! current holder.

use crate::core::{CompanyId, Player, PlayerId, PlayerMap};

/// Shares of `company` held across all players.
#[must_use]
pub fn aggregate_shares(players: &PlayerMap<Player>, company: CompanyId) -> usize {
    players.values().map(|p| p.share_count(company)).sum()
}

/// More than one share of `company` has been committed in total.
#[must_use]
pub fn monopoly_exists(players: &PlayerMap<Player>, company: CompanyId) -> bool {
    aggregate_shares(players, company) > 1
}

/// Highest share count of `company` among everyone except `player`.
#[must_use]
pub fn eligibility_threshold(
    players: &PlayerMap<Player>,
    company: CompanyId,
    player: PlayerId,
) -> usize {
    players
        .iter()
        .filter(|(id, _)| *id != player)
        .map(|(_, p)| p.share_count(company))
        .max()
        .unwrap_or(0)
}

/// The seat with the strictly largest non-zero count, if there is one.
///
/// ```
/// use startups_engine::core::PlayerId;
/// use startups_engine::rules::strict_leader;
///
/// let p = PlayerId::new;
/// assert_eq!(strict_leader([(p(0), 2), (p(1), 3), (p(2), 1)]), Some(p(1)));
/// assert_eq!(strict_leader([(p(0), 2), (p(1), 2)]), None);
/// assert_eq!(strict_leader([(p(0), 0), (p(1), 0)]), None);
/// ```
pub fn strict_leader<I>(counts: I) -> Option<PlayerId>
where
    I: IntoIterator<Item = (PlayerId, usize)>,
{
    let mut leader = None;
    let mut best = 0;
    let mut tied = false;

    for (player, count) in counts {
        if count > best {
            best = count;
            leader = Some(player);
            tied = false;
        } else if count == best && best > 0 {
            tied = true;
        }
    }

    if tied {
        None
    } else {
        leader
    }
}

/// Unique majority shareholder of `company`.
#[must_use]
pub fn majority_holder(players: &PlayerMap<Player>, company: CompanyId) -> Option<PlayerId> {
    strict_leader(players.iter().map(|(id, p)| (id, p.share_count(company))))
}

/// Who holds the token for `company`, if anyone.
#[must_use]
pub fn token_holder(players: &PlayerMap<Player>, company: CompanyId) -> Option<PlayerId> {
    players
        .iter()
        .find(|(_, p)| p.has_token(company))
        .map(|(id, _)| id)
}

/// Give `player` the token for `company` if they have earned it.
///
/// With at most one share committed overall the sole shareholder always
/// qualifies; otherwise the player must beat every other seat outright.
/// Returns whether the token was newly granted.
pub fn grant_token(players: &mut PlayerMap<Player>, player: PlayerId, company: CompanyId) -> bool {
    let count = players[player].share_count(company);
    let eligible = if monopoly_exists(players, company) {
        count > eligibility_threshold(players, company, player)
    } else {
        count > 0
    };

    if eligible && !players[player].has_token(company) {
        players[player].tokens.insert(company);
        return true;
    }
    false
}

/// Take the token for `company` away from `player` if someone else has
/// caught up. Returns whether it was revoked.
pub fn revoke_token(players: &mut PlayerMap<Player>, player: PlayerId, company: CompanyId) -> bool {
    if !players[player].has_token(company) {
        return false;
    }
    let count = players[player].share_count(company);
    if count <= eligibility_threshold(players, company, player) {
        players[player].tokens.remove(&company);
        return true;
    }
    false
}

/// Re-establish token ownership for `company` after `actor` committed a share.
///
/// The actor is considered first; every other holder is then re-checked, so
/// at most one seat ends up holding the token.
pub fn settle_tokens(players: &mut PlayerMap<Player>, actor: PlayerId, company: CompanyId) {
    if grant_token(players, actor, company) {
        log::debug!("{actor} takes the token for company {company}");
    }
    let others: Vec<PlayerId> = players.player_ids().filter(|&p| p != actor).collect();
    for other in others {
        if revoke_token(players, other, company) {
            log::debug!("{other} loses the token for company {company}");
        }
    }
}
