//! Formatting of selection outcomes.
//!
//! Public rounds produce one message for the channel. Private rounds produce one
//! personalized direct message for every member of the candidate pool: the selected
//! members learn they are the imposters (and optionally who their teammates are),
//! everyone else learns only that they are safe.

use crate::{
    error::game::GameError,
    model::{
        direct_message::{DirectMessage, DirectMessageBatch},
        member::CandidateMember,
        selection::{ImposterParams, SelectionResult},
    },
    util::grammar::indefinite_article,
};

/// Formats the public announcement for a `/select` round.
///
/// # Arguments
/// - `selection` - Members drawn by the selection engine
/// - `role_name` - Role textually assigned to them
///
/// # Returns
/// - `String` - A single congratulation line for one member, or a header followed by
///   one bullet per member
pub fn announce_public(selection: &SelectionResult, role_name: &str) -> String {
    if let [selected] = selection.selected.as_slice() {
        return format!(
            "Congrats! {} has been selected to be the {}",
            selected.mention, role_name
        );
    }

    let mut response = format!(
        "Congrats! The following people have been selected to be {} {}:\n",
        indefinite_article(role_name),
        role_name
    );
    for selected in &selection.selected {
        response.push_str(&format!("- {}\n", selected.mention));
    }
    response
}

/// Builds the direct messages for an `/imposter` round.
///
/// Every pool member receives exactly one message. Imposters are told their role;
/// when there are several and `reveal_imposters` is set, each imposter's message also
/// lists the other imposters. Everyone else is told the safe role, or that they are
/// not the imposter when no safe role was given.
///
/// # Arguments
/// - `pool` - Candidate pool the selection was drawn from
/// - `selection` - Members drawn as imposters
/// - `params` - Role names, imposter count, and reveal setting of the round
///
/// # Returns
/// - `Ok(DirectMessageBatch)` - One message per pool member, keyed by member ID
/// - `Err(GameError::InvalidArgument)` - `params.n` is less than 1
pub fn announce_private(
    pool: &[CandidateMember],
    selection: &SelectionResult,
    params: &ImposterParams,
) -> Result<DirectMessageBatch, GameError> {
    if params.n < 1 {
        return Err(GameError::InvalidArgument(format!(
            "`n` must be strictly positive, got {}",
            params.n
        )));
    }

    let imposter_name = &params.imposter_name;
    let imposter_article = indefinite_article(imposter_name);
    let single = params.n == 1;

    let safe_dm = match (params.safe_role_name.as_str(), single) {
        ("", true) => format!(":relieved: Phew! You are NOT the {}!", imposter_name),
        ("", false) => format!(
            ":relieved: Phew! You are NOT {} {}!",
            imposter_article, imposter_name
        ),
        (safe_role_name, _) => format!(
            ":relieved: Phew! You're {} {}!",
            indefinite_article(safe_role_name),
            safe_role_name
        ),
    };

    let imposter_dm = |imposter: &CandidateMember| {
        if single {
            return format!(":smiling_imp: Yikes! You are the {}!", imposter_name);
        }

        let mut dm = format!(
            ":smiling_imp: Yikes! You're {} {}!\n",
            imposter_article, imposter_name
        );
        if params.reveal_imposters {
            dm.push_str(&format!("Your fellow {}s are:\n", imposter_name));
            for fellow in selection.selected.iter().filter(|m| m.id != imposter.id) {
                dm.push_str(&format!("- {}\n", fellow.mention));
            }
        }
        dm
    };

    Ok(pool
        .iter()
        .map(|member| {
            let text = if selection.contains(member.id) {
                imposter_dm(member)
            } else {
                safe_dm.clone()
            };

            (
                member.id,
                DirectMessage {
                    member: member.clone(),
                    text,
                },
            )
        })
        .collect())
}
