//! Object-storage naming for uploaded images.

/// Folder for character portraits.
pub const CHARACTER_IMAGE_FOLDER: &str = "characters";

/// Folder for team images.
pub const TEAM_IMAGE_FOLDER: &str = "teams";

/// Build the destination path of an uploaded image.
///
/// Convention: `{folder}/{owner_name}_{file_name}`
///
/// - spaces in `owner_name` become underscores
/// - any directory components in the client-supplied `file_name` are dropped
///
/// # Examples
///
/// ```
/// use roster_core::naming::image_object_path;
///
/// assert_eq!(
///     image_object_path("characters", "Peter Parker", "spidey.png"),
///     "characters/Peter_Parker_spidey.png"
/// );
/// assert_eq!(
///     image_object_path("teams", "X-Men", "../../etc/logo.jpg"),
///     "teams/X-Men_logo.jpg"
/// );
/// ```
pub fn image_object_path(folder: &str, owner_name: &str, file_name: &str) -> String {
    let owner = owner_name.trim().replace(' ', "_");
    let file = base_file_name(file_name);
    format!("{folder}/{owner}_{file}")
}

/// Strip any `/` or `\` separated directory prefix from a client file name.
pub fn base_file_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
}
