use super::*;

impl<'a> VenueRepo for DbReadOnly<'a> {
    fn create_venue(&self, _venue: NewVenue) -> Result<Venue> {
        unreachable!();
    }

    fn get_venue(&self, id: i64) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn nearby_venues(&self, limit: usize) -> Result<Vec<Venue>> {
        nearby_venues(&mut self.conn.borrow_mut(), limit)
    }
}

impl<'a> VenueRepo for DbReadWrite<'a> {
    fn create_venue(&self, venue: NewVenue) -> Result<Venue> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }

    fn get_venue(&self, id: i64) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn nearby_venues(&self, limit: usize) -> Result<Vec<Venue>> {
        nearby_venues(&mut self.conn.borrow_mut(), limit)
    }
}

impl<'a> VenueRepo for DbConnection<'a> {
    fn create_venue(&self, venue: NewVenue) -> Result<Venue> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }

    fn get_venue(&self, id: i64) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn nearby_venues(&self, limit: usize) -> Result<Vec<Venue>> {
        nearby_venues(&mut self.conn.borrow_mut(), limit)
    }
}

fn create_venue(conn: &mut SqliteConnection, v: NewVenue) -> Result<Venue> {
    let new_venue = models::NewVenue {
        name: &v.name,
        address: &v.address,
        lat: &v.lat,
        lng: &v.lng,
        image_url: v.image_url.as_deref(),
        description: v.description.as_deref(),
        rating: v.rating,
        distance: v.distance.as_deref(),
    };
    Ok(diesel::insert_into(schema::venues::table)
        .values(&new_venue)
        .get_result::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn get_venue(conn: &mut SqliteConnection, id: i64) -> Result<Venue> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .find(id)
        .first::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .load::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn nearby_venues(conn: &mut SqliteConnection, limit: usize) -> Result<Vec<Venue>> {
    use schema::venues::dsl;
    // No geospatial index yet: the first venues stand in for "nearby".
    Ok(dsl::venues
        .limit(limit as i64)
        .load::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
