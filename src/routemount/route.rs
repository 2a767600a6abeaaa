use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::route::{bookings::{approve_booking, cancel_booking, get_booking_by_id, get_bookings, get_payment_by_id, reject_booking}, clients::{create_client, get_client_by_id, get_client_voucher, get_clients}, courts::{create_court, get_court_availability, get_court_by_id, get_court_schedule, get_courts, get_sports}, revenue::{get_daily_revenue, get_monthly_revenue, get_weekly_revenue}, sessions::{apply_voucher, cancel_session, confirm_session, create_session, get_quote, get_session, get_session_availability, refresh_session, remove_voucher, toggle_slot}, vouchers::{assign_voucher, get_voucher_by_tier, get_vouchers}};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
    //sports
    .route("/sports", get(get_sports))                                  //fixed sport catalog with hourly prices
    //courts
    .route("/courts", post(create_court))                               //add a court, admin only
    .route("/courts", get(get_courts))                                  //list courts, optional ?sport= filter
    .route("/courts/{id}", get(get_court_by_id))                        //get court by id
    .route("/courts/{id}/schedule", get(get_court_schedule))            //7 day window + slot catalog
    .route("/courts/{id}/availability", get(get_court_availability))    //booked/available grid for ?date=
    //booking sessions
    .route("/sessions", post(create_session))                           //open a booking session for a court
    .route("/sessions/{id}", get(get_session))                          //session state and selections
    .route("/sessions/{id}", delete(cancel_session))                    //cancel, clears everything
    .route("/sessions/{id}/refresh", post(refresh_session))             //re-fetch reservation snapshot
    .route("/sessions/{id}/availability", get(get_session_availability))//grid including selected slots
    .route("/sessions/{id}/slots/toggle", post(toggle_slot))            //select/deselect a slot
    .route("/sessions/{id}/voucher", post(apply_voucher))               //apply tier voucher
    .route("/sessions/{id}/voucher", delete(remove_voucher))            //remove applied voucher
    .route("/sessions/{id}/quote", get(get_quote))                      //current price breakdown
    .route("/sessions/{id}/confirm", post(confirm_session))             //submit bookings + mock payments
    //bookings
    .route("/bookings", get(get_bookings))                              //list bookings, optional ?user_id=
    .route("/bookings/{id}", get(get_booking_by_id))                    //booking with its payment
    .route("/bookings/{id}/approve", patch(approve_booking))            //admin approve, pending only
    .route("/bookings/{id}/reject", patch(reject_booking))              //admin reject, pending only
    .route("/bookings/{id}", delete(cancel_booking))                    //cancel own booking, ?user_id=
    //payments
    .route("/payments/{id}", get(get_payment_by_id))                    //mock payment by id
    //vouchers
    .route("/vouchers", get(get_vouchers))                              //list tier vouchers
    .route("/vouchers/{tier}", get(get_voucher_by_tier))                //voucher assigned to a tier
    .route("/vouchers/{tier}", put(assign_voucher))                     //assign voucher to tier, admin only
    //clients
    .route("/clients", post(create_client))                             //register a client at LEAD tier
    .route("/clients", get(get_clients))                                //list clients
    .route("/clients/{id}", get(get_client_by_id))                      //get client by id
    .route("/clients/{id}/voucher", get(get_client_voucher))            //voucher eligibility for this client
    //revenue
    .route("/revenue/daily", get(get_daily_revenue))                    //current week by weekday
    .route("/revenue/weekly", get(get_weekly_revenue))                  //current month by iso week
    .route("/revenue/monthly", get(get_monthly_revenue))                //current year by month
    .with_state(state)
}
