// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// lakota-ffi: C-compatible FFI layer for LakotaHandle.
//
// Memory management rules:
// - Opaque `LakotaHandle` pointer: created by `lk_new`/`lk_new_from_text`,
//   freed by `lk_free`.
// - Returned strings: caller must free with `lk_free_str`.
// - Returned string arrays: caller must free with `lk_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings. Input
//   that is not valid UTF-8 is reported as LK_INVALID_STRING.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use lakota_core::ErrorKind;
use lakota_core::transform::decode;
use lakota_speller::SuggestionResult;
use lakota_speller::handle::LakotaHandle;
use lakota_speller::tokenizer;
use log::debug;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new Lakota handle from a lexicon file.
///
/// With a NULL `path` the file named by `LK_DICTIONARY` is loaded.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `lk_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_new(path: *const c_char, error_out: *mut *mut c_char) -> *mut LakotaHandle {
    let loaded = if path.is_null() {
        LakotaHandle::from_default_path()
    } else {
        let Some(path) = cstr_to_str(path) else {
            set_error(error_out, "path is not valid UTF-8");
            return ptr::null_mut();
        };
        LakotaHandle::from_path(path)
    };
    into_handle(loaded, error_out)
}

/// Create a new Lakota handle from lexicon text held in memory.
///
/// Same return and error conventions as `lk_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_new_from_text(
    text: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut LakotaHandle {
    let Some(text) = cstr_to_str(text) else {
        set_error(error_out, "lexicon text is null or not valid UTF-8");
        return ptr::null_mut();
    };
    into_handle(LakotaHandle::from_text(text), error_out)
}

/// Free a LakotaHandle created by `lk_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_free(handle: *mut LakotaHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Spell checking ──────────────────────────────────────────────

/// Check whether a word is correctly spelled.
/// Returns 1 for correct, 0 for incorrect, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_spell(handle: *const LakotaHandle, word: *const c_char) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    if handle.spell(word) { 1 } else { 0 }
}

/// Check a word in front of `next` and generate suggestions.
///
/// `next` is the word that follows in the text: an empty string or
/// sentence-final punctuation marks the end of a sentence, NULL skips
/// ablaut checking.
///
/// `out_count` (if non-NULL) receives 0 when the word is correct, the
/// number of suggestions when there are any, and a negated error code
/// otherwise (`-LK_WORD_NOT_FOUND` for an unknown word).
///
/// Returns a NULL-terminated array of C strings when there are
/// suggestions, NULL otherwise. Caller must free with `lk_free_str_array`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_suggest(
    handle: *const LakotaHandle,
    word: *const c_char,
    next: *const c_char,
    out_count: *mut c_int,
) -> *mut *mut c_char {
    let result = match unsafe { handle.as_ref() } {
        None => SuggestionResult::Error(ErrorKind::InvalidArgument),
        Some(handle) => match (lookup_arg(word), lookup_arg(next)) {
            (Ok(Some(word)), Ok(next)) => handle.suggest(word, next),
            (Ok(None), _) => SuggestionResult::Error(ErrorKind::InvalidArgument),
            (Err(kind), _) | (_, Err(kind)) => SuggestionResult::Error(kind),
        },
    };

    if !out_count.is_null() {
        unsafe { *out_count = result.code() };
    }
    match result {
        SuggestionResult::Suggestions(list) => strings_to_c_array(&list),
        _ => ptr::null_mut(),
    }
}

// ── Word scanning ───────────────────────────────────────────────

/// Find the first word of `text` starting at or after byte `offset`.
///
/// Returns 1 and fills `out_start`/`out_len` (byte offset and length)
/// when a word is found, 0 when there is none, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_next_word(
    text: *const c_char,
    offset: usize,
    out_start: *mut usize,
    out_len: *mut usize,
) -> c_int {
    let Some(text) = cstr_to_str(text) else {
        return -1;
    };
    write_span(tokenizer::next_word(text, offset), out_start, out_len)
}

/// Find the word of `text` that contains byte `offset`, scanning back to
/// its start.
///
/// Same return conventions as `lk_next_word`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_word_at(
    text: *const c_char,
    offset: usize,
    out_start: *mut usize,
    out_len: *mut usize,
) -> c_int {
    let Some(text) = cstr_to_str(text) else {
        return -1;
    };
    write_span(tokenizer::word_at(text, offset), out_start, out_len)
}

// ── Options and queries ─────────────────────────────────────────

/// Cap the plain suggestions returned by `lk_suggest`. A negative value
/// removes the cap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_set_max_suggestions(handle: *mut LakotaHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_max_suggestions(usize::try_from(value).ok());
    }
}

/// Number of dictionary entries, ablaut variants included.
/// Returns 0 for a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_word_count(handle: *const LakotaHandle) -> usize {
    unsafe { handle.as_ref() }.map_or(0, LakotaHandle::word_count)
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn lk_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(LakotaHandle::get_version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by lk functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lk_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn into_handle(
    loaded: lakota_core::Result<LakotaHandle>,
    error_out: *mut *mut c_char,
) -> *mut LakotaHandle {
    match loaded {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            debug!("lk_new failed: {e}");
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

/// Decode an optional string argument: NULL is `None`, bad UTF-8 is an
/// error.
fn lookup_arg<'a>(s: *const c_char) -> Result<Option<&'a str>, ErrorKind> {
    if s.is_null() {
        return Ok(None);
    }
    decode(unsafe { CStr::from_ptr(s) }.to_bytes())
        .map(Some)
        .map_err(|e| e.kind())
}

fn write_span(
    span: Option<lakota_core::WordSpan>,
    out_start: *mut usize,
    out_len: *mut usize,
) -> c_int {
    let Some(span) = span else {
        return 0;
    };
    if !out_start.is_null() {
        unsafe { *out_start = span.start };
    }
    if !out_len.is_null() {
        unsafe { *out_len = span.len };
    }
    1
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    Box::into_raw(ptrs.into_boxed_slice()).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // The array was allocated as a boxed slice of exactly i + 1 pointers.
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
